// Pattern 1: Singleton Pattern - Process-Wide Database Connection
// Demonstrates lazy one-time construction of a shared handle.

use colored::Colorize;
use std::sync::OnceLock;

// ============================================================================
// Example: Lazily-Initialized Connection Handle
// ============================================================================

struct DatabaseConnection {
    #[allow(dead_code)]
    dsn: String,
}

impl DatabaseConnection {
    fn instance() -> &'static DatabaseConnection {
        static INSTANCE: OnceLock<DatabaseConnection> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            println!("Database Connection established");
            DatabaseConnection {
                dsn: "postgres://localhost".to_string(),
            }
        })
    }

    fn query(&self, sql: &str) {
        println!("Executing query: {}", sql);
    }
}

fn singleton_example() {
    let db1 = DatabaseConnection::instance();
    let db2 = DatabaseConnection::instance();

    db1.query("SELECT * FROM users");
    db2.query("INSERT INTO users VALUES (1, 'John')");

    // Both handles refer to the one process-wide instance
    println!("Same instance: {}", std::ptr::eq(db1, db2));
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("{}", "Pattern 1: Singleton Pattern".bold());
    println!("===============================\n");

    println!("=== Process-Wide Database Connection ===");
    singleton_example();
}
