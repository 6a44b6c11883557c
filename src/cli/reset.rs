//! Reset command implementation

use anyhow::Result;

use qotd::store::SqliteStore;

/// Delete all persisted streak state
pub fn reset_command(store: &SqliteStore) -> Result<()> {
    store.clear()?;
    println!("Streak state cleared.");
    Ok(())
}
