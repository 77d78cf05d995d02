// Design Patterns Demo Catalog
// This crate demonstrates three classic object-oriented design patterns.

pub mod examples {
    //! # Design Patterns Quick Reference
    //!
    //! This crate provides runnable examples for:
    //!
    //! ## Pattern 1: Singleton Pattern
    //! - Process-wide `DatabaseConnection` handle (`OnceLock`)
    //!
    //! ## Pattern 2: Decorator Pattern
    //! - Composable coffee pricing (trait objects, `Box<dyn Coffee>`)
    //!
    //! ## Pattern 3: Observer Pattern
    //! - Weather station notifications (trait objects, `Arc<Mutex<..>>`)
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_singleton
    //! cargo run --bin p2_decorator
    //! cargo run --bin p3_observer
    //! ```
}
