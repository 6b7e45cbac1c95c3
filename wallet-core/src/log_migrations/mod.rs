//! Log database migrations, embedded at compile time
//!
//! Each entry is `(file name, sql)`, applied in order. `000_migrations.sql`
//! bootstraps the tracking table and must stay first.

pub const LOG_MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    (
        "001_initial_schema.sql",
        include_str!("001_initial_schema.sql"),
    ),
];
