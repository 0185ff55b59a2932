pub mod backup;
pub mod config;
pub mod exec;
pub mod habit;
pub mod note;
pub mod ritual;
pub mod shop;
pub mod skill;
pub mod stats;
pub mod task;
pub mod timer;

use lifeos_core::App;

/// Print queued transient notices, one per line.
pub fn flush_notices(app: &mut App) {
    for notice in app.drain_notices() {
        println!("{notice}");
    }
}
