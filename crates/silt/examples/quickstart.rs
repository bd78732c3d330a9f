//! Silt Quickstart — a store, some values, a dump, and a reservation.
//!
//! Demonstrates:
//!   1. Creating a fixed-capacity store
//!   2. Writing big-endian values with chained pointers
//!   3. Hex-dumping the region and reading values back
//!   4. Fragmenting, then reserving through the compaction fallback
//!   5. Inspecting the compaction counters
//!
//! Run with:
//!   cargo run --example quickstart

use silt::prelude::*;
use std::f64::consts::PI;

// ─── Store parameters ───────────────────────────────────────────

const CAPACITY: usize = 32;
const DUMP_WIDTH: usize = 8;

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Silt Quickstart ===\n");

    // 1. Create the store: every byte free and zeroed.
    let mut store = Store::new(CAPACITY)?;
    println!(
        "Store: {} bytes capacity, {} free, {} bytes resident",
        store.capacity(),
        store.free_count(),
        store.memory_bytes()
    );

    // 2. Write values. Every write returns the next unused pointer,
    //    so the calls chain into a packed record.
    let ptr = write_u16(&mut store, 0, 65_461)?; // 0xFFB5
    let ptr = write_str(&mut store, ptr, "silt")?;
    let ptr = write_f64(&mut store, ptr, PI)?;
    println!("\nWrote u16 + string + f64, next pointer: {ptr}");

    // 3. Dump the region and read the values back. The same two
    //    bytes 0xFF 0xB5 read signed come out as -75.
    println!("{}\n", store.hex_dump(DUMP_WIDTH));
    println!("u16 at 0:    {}", read_u16(&store, 0)?);
    println!("i16 at 0:    {}", read_i16(&store, 0)?);
    println!("string at 2: {:?}", read_str(&store, 2)?);
    println!("f64 at 8:    {}", read_f64(&store, 8)?);

    // 4. Free the string span and ask for more contiguous space than
    //    any single free run holds. The reservation compacts live
    //    bytes toward the front and retries, so it still succeeds —
    //    at the cost of relocating the f64.
    store.free_range(2, 6)?;
    println!(
        "\nFreed the string span: {} free, longest run too short for 20",
        store.free_count()
    );
    let scratch = store.reserve(20)?;
    println!("Reserved 20 bytes at {scratch}");
    println!("f64 now at 2: {}", read_f64(&store, 2)?);

    // 5. The counters record what the reservation cost.
    let stats = store.stats();
    println!(
        "\nStats: {} reservations, {} compaction passes ({} as reservation fallback), {} bytes relocated",
        stats.reservations,
        stats.compaction_passes,
        stats.compaction_fallbacks,
        stats.bytes_relocated
    );

    println!("\nDone.");
    Ok(())
}
