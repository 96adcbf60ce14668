// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Versioned schema and the ordered migration chain.
//!
//! The schema version lives in `PRAGMA user_version`. Every supported
//! version has a declared [`SchemaDef`]; a fresh database is created
//! straight from the latest declaration, and an older one is upgraded one
//! step at a time with hand-written DDL. [`introspect`] reads a live
//! connection back into a [`SchemaDef`] so each step can be checked against
//! the declaration of its target version.

use std::collections::{BTreeMap, BTreeSet};

use rusqlite::{params, Connection};

use crate::error::{Error, Result};

/// Oldest version that can still be upgraded.
pub const MIN_SUPPORTED_VERSION: i64 = 3;

/// Version created for fresh databases.
pub const LATEST_VERSION: i64 = 7;

/// One upgrade step between consecutive versions.
pub struct Migration {
    pub from: i64,
    pub to: i64,
    sql: &'static str,
}

/// `3 -> 4`: email restrictions move to their own child table.
pub const MIGRATION_3_4: Migration = Migration {
    from: 3,
    to: 4,
    sql: "CREATE TABLE coupon_emails (
        coupon_id INTEGER NOT NULL,
        site_id INTEGER NOT NULL,
        email TEXT NOT NULL,
        PRIMARY KEY (coupon_id, site_id, email),
        FOREIGN KEY (site_id, coupon_id) REFERENCES coupons(site_id, id) ON DELETE CASCADE
    );",
};

/// `4 -> 5`: order notes record customer visibility.
pub const MIGRATION_4_5: Migration = Migration {
    from: 4,
    to: 5,
    sql: "ALTER TABLE order_notes ADD COLUMN is_customer_note INTEGER NOT NULL DEFAULT 0;",
};

/// `5 -> 6`: coupons record product and category restrictions.
pub const MIGRATION_5_6: Migration = Migration {
    from: 5,
    to: 6,
    sql: "ALTER TABLE coupons ADD COLUMN product_ids TEXT NOT NULL DEFAULT '[]';
          ALTER TABLE coupons ADD COLUMN excluded_product_ids TEXT NOT NULL DEFAULT '[]';
          ALTER TABLE coupons ADD COLUMN category_ids TEXT NOT NULL DEFAULT '[]';
          ALTER TABLE coupons ADD COLUMN excluded_category_ids TEXT NOT NULL DEFAULT '[]';",
};

/// `6 -> 7`: index for the revenue stats lookup by site, interval and range.
pub const MIGRATION_6_7: Migration = Migration {
    from: 6,
    to: 7,
    sql: "CREATE INDEX idx_revenue_stats_lookup
          ON revenue_stats (local_site_id, interval, start_date, end_date);",
};

/// The full chain, in order.
pub const MIGRATIONS: [&Migration; 4] = [&MIGRATION_3_4, &MIGRATION_4_5, &MIGRATION_5_6, &MIGRATION_6_7];

/// A column as SQLite reports it through `pragma_table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub sql_type: String,
    pub not_null: bool,
    /// Default expression as written, e.g. `0` or `'[]'`.
    pub default: Option<String>,
    /// 1-based position in the primary key, 0 when not part of it.
    pub pk: i64,
}

impl ColumnDef {
    fn new(name: &str, sql_type: &str) -> Self {
        ColumnDef {
            name: name.to_string(),
            sql_type: sql_type.to_string(),
            not_null: false,
            default: None,
            pk: 0,
        }
    }

    fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    fn default_value(mut self, expr: &str) -> Self {
        self.default = Some(expr.to_string());
        self
    }

    fn primary_key(mut self, position: i64) -> Self {
        self.pk = position;
        self
    }

    fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.sql_type);
        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        if let Some(ref default) = self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        sql
    }
}

/// A foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ForeignKeyDef {
    pub columns: Vec<String>,
    pub parent: String,
    pub parent_columns: Vec<String>,
    pub on_delete: String,
}

/// A table: columns keyed by name plus its foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: String,
    pub columns: BTreeMap<String, ColumnDef>,
    pub foreign_keys: BTreeSet<ForeignKeyDef>,
    /// Declaration order, used only when generating DDL.
    order: Vec<String>,
}

impl TableDef {
    fn new(name: &str, columns: Vec<ColumnDef>) -> Self {
        let order = columns.iter().map(|c| c.name.clone()).collect();
        TableDef {
            name: name.to_string(),
            columns: columns.into_iter().map(|c| (c.name.clone(), c)).collect(),
            foreign_keys: BTreeSet::new(),
            order,
        }
    }

    fn foreign_key(
        mut self,
        columns: &[&str],
        parent: &str,
        parent_columns: &[&str],
        on_delete: &str,
    ) -> Self {
        self.foreign_keys.insert(ForeignKeyDef {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            parent: parent.to_string(),
            parent_columns: parent_columns.iter().map(|c| c.to_string()).collect(),
            on_delete: on_delete.to_string(),
        });
        self
    }

    fn add_column(&mut self, column: ColumnDef) {
        self.order.push(column.name.clone());
        self.columns.insert(column.name.clone(), column);
    }

    fn create_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .order
            .iter()
            .filter_map(|name| self.columns.get(name))
            .map(ColumnDef::to_sql)
            .collect();

        let mut pk: Vec<&ColumnDef> = self.columns.values().filter(|c| c.pk > 0).collect();
        pk.sort_by_key(|c| c.pk);
        if !pk.is_empty() {
            let names: Vec<&str> = pk.iter().map(|c| c.name.as_str()).collect();
            parts.push(format!("PRIMARY KEY ({})", names.join(", ")));
        }

        for fk in &self.foreign_keys {
            parts.push(format!(
                "FOREIGN KEY ({}) REFERENCES {}({}) ON DELETE {}",
                fk.columns.join(", "),
                fk.parent,
                fk.parent_columns.join(", "),
                fk.on_delete
            ));
        }

        format!("CREATE TABLE {} (\n    {}\n)", self.name, parts.join(",\n    "))
    }
}

/// A named, explicitly created index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexDef {
    pub name: String,
    pub table: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

impl IndexDef {
    fn new(name: &str, table: &str, columns: &[&str]) -> Self {
        IndexDef {
            name: name.to_string(),
            table: table.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            unique: false,
        }
    }

    fn create_sql(&self) -> String {
        format!(
            "CREATE {}INDEX {} ON {} ({})",
            if self.unique { "UNIQUE " } else { "" },
            self.name,
            self.table,
            self.columns.join(", ")
        )
    }
}

/// Tables and indexes of one schema version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDef {
    pub tables: BTreeMap<String, TableDef>,
    pub indexes: BTreeSet<IndexDef>,
}

impl SchemaDef {
    fn table_mut(&mut self, name: &str) -> Result<&mut TableDef> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| Error::CorruptedData(format!("schema declares no table '{name}'")))
    }

    fn add_table(&mut self, table: TableDef) {
        self.tables.insert(table.name.clone(), table);
    }
}

fn schema_v3() -> SchemaDef {
    let coupons = TableDef::new(
        "coupons",
        vec![
            ColumnDef::new("site_id", "INTEGER").not_null().primary_key(1),
            ColumnDef::new("id", "INTEGER").not_null().primary_key(2),
            ColumnDef::new("code", "TEXT").not_null(),
            ColumnDef::new("amount", "TEXT").not_null(),
            ColumnDef::new("date_created_gmt", "TEXT").not_null(),
            ColumnDef::new("date_modified_gmt", "TEXT").not_null(),
            ColumnDef::new("discount_type", "TEXT").not_null(),
            ColumnDef::new("description", "TEXT").not_null(),
            ColumnDef::new("date_expires_gmt", "TEXT").not_null(),
            ColumnDef::new("usage_count", "INTEGER").not_null(),
            ColumnDef::new("individual_use", "INTEGER").not_null(),
            ColumnDef::new("usage_limit", "INTEGER").not_null(),
            ColumnDef::new("usage_limit_per_user", "INTEGER").not_null(),
            ColumnDef::new("limit_usage_to_x_items", "INTEGER").not_null(),
            ColumnDef::new("free_shipping", "INTEGER").not_null(),
            ColumnDef::new("exclude_sale_items", "INTEGER").not_null(),
            ColumnDef::new("minimum_amount", "TEXT").not_null(),
            ColumnDef::new("maximum_amount", "TEXT").not_null(),
        ],
    );

    let revenue_stats = TableDef::new(
        "revenue_stats",
        vec![
            ColumnDef::new("id", "INTEGER").primary_key(1),
            ColumnDef::new("local_site_id", "INTEGER").not_null(),
            ColumnDef::new("interval", "TEXT").not_null(),
            ColumnDef::new("start_date", "TEXT").not_null(),
            ColumnDef::new("end_date", "TEXT").not_null(),
            ColumnDef::new("data", "TEXT").not_null(),
            ColumnDef::new("total", "TEXT").not_null(),
        ],
    );

    let order_notes = TableDef::new(
        "order_notes",
        vec![
            ColumnDef::new("local_site_id", "INTEGER").not_null().primary_key(1),
            ColumnDef::new("note_id", "INTEGER").not_null().primary_key(2),
            ColumnDef::new("order_id", "INTEGER").not_null(),
            ColumnDef::new("date_created", "TEXT").not_null(),
            ColumnDef::new("note", "TEXT").not_null(),
            ColumnDef::new("author", "TEXT").not_null(),
            ColumnDef::new("is_system_note", "INTEGER").not_null(),
        ],
    );

    let mut schema = SchemaDef {
        tables: BTreeMap::new(),
        indexes: BTreeSet::new(),
    };
    schema.add_table(coupons);
    schema.add_table(revenue_stats);
    schema.add_table(order_notes);
    schema.indexes.insert(IndexDef::new(
        "idx_order_notes_order",
        "order_notes",
        &["local_site_id", "order_id"],
    ));
    schema
}

/// The declared schema of `version`.
pub fn declared_schema(version: i64) -> Result<SchemaDef> {
    if !(MIN_SUPPORTED_VERSION..=LATEST_VERSION).contains(&version) {
        return Err(unsupported(version));
    }

    let mut schema = schema_v3();
    if version >= 4 {
        schema.add_table(
            TableDef::new(
                "coupon_emails",
                vec![
                    ColumnDef::new("coupon_id", "INTEGER").not_null().primary_key(1),
                    ColumnDef::new("site_id", "INTEGER").not_null().primary_key(2),
                    ColumnDef::new("email", "TEXT").not_null().primary_key(3),
                ],
            )
            .foreign_key(&["site_id", "coupon_id"], "coupons", &["site_id", "id"], "CASCADE"),
        );
    }
    if version >= 5 {
        schema.table_mut("order_notes")?.add_column(
            ColumnDef::new("is_customer_note", "INTEGER")
                .not_null()
                .default_value("0"),
        );
    }
    if version >= 6 {
        let coupons = schema.table_mut("coupons")?;
        for column in [
            "product_ids",
            "excluded_product_ids",
            "category_ids",
            "excluded_category_ids",
        ] {
            coupons.add_column(ColumnDef::new(column, "TEXT").not_null().default_value("'[]'"));
        }
    }
    if version >= 7 {
        schema.indexes.insert(IndexDef::new(
            "idx_revenue_stats_lookup",
            "revenue_stats",
            &["local_site_id", "interval", "start_date", "end_date"],
        ));
    }
    Ok(schema)
}

fn unsupported(version: i64) -> Error {
    Error::UnsupportedSchemaVersion {
        found: version,
        min: MIN_SUPPORTED_VERSION,
        max: LATEST_VERSION,
    }
}

/// Read `PRAGMA user_version`.
pub fn user_version(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

/// Create the declared schema of `version` on an empty database.
pub fn create_at_version(conn: &Connection, version: i64) -> Result<()> {
    let schema = declared_schema(version)?;
    let tx = conn.unchecked_transaction()?;
    for table in schema.tables.values() {
        tx.execute_batch(&table.create_sql())?;
    }
    for index in &schema.indexes {
        tx.execute_batch(&index.create_sql())?;
    }
    tx.pragma_update(None, "user_version", version)?;
    tx.commit()?;
    Ok(())
}

/// Apply one migration step in its own transaction.
pub fn apply(conn: &Connection, migration: &Migration) -> Result<()> {
    let current = user_version(conn)?;
    if current != migration.from {
        return Err(Error::CorruptedData(format!(
            "migration {} -> {} cannot run on schema version {current}",
            migration.from, migration.to
        )));
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(migration.sql)?;
    tx.pragma_update(None, "user_version", migration.to)?;
    tx.commit()?;
    tracing::info!(
        from = migration.from,
        to = migration.to,
        "applied schema migration"
    );
    Ok(())
}

/// Bring the database to [`LATEST_VERSION`].
///
/// A fresh database (version 0) is created at the latest version. Versions
/// in the supported range are upgraded step by step. Anything else is
/// rejected.
pub fn migrate(conn: &Connection) -> Result<()> {
    let version = user_version(conn)?;
    if version == 0 {
        tracing::debug!(version = LATEST_VERSION, "creating schema");
        return create_at_version(conn, LATEST_VERSION);
    }
    if !(MIN_SUPPORTED_VERSION..=LATEST_VERSION).contains(&version) {
        return Err(unsupported(version));
    }

    for migration in MIGRATIONS.iter().filter(|m| m.from >= version) {
        apply(conn, migration)?;
    }
    Ok(())
}

/// Read the schema of a live connection.
pub fn introspect(conn: &Connection) -> Result<SchemaDef> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;

    let mut schema = SchemaDef {
        tables: BTreeMap::new(),
        indexes: BTreeSet::new(),
    };

    for name in names {
        let mut stmt = conn.prepare(
            "SELECT name, type, \"notnull\", dflt_value, pk FROM pragma_table_info(?1) ORDER BY cid",
        )?;
        let columns = stmt
            .query_map(params![name], |row| {
                Ok(ColumnDef {
                    name: row.get(0)?,
                    sql_type: row.get(1)?,
                    not_null: row.get(2)?,
                    default: row.get(3)?,
                    pk: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let mut table = TableDef::new(&name, columns);

        let mut stmt = conn.prepare(
            "SELECT id, \"table\", \"from\", \"to\", on_delete
             FROM pragma_foreign_key_list(?1) ORDER BY id, seq",
        )?;
        let rows = stmt
            .query_map(params![name], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let mut grouped: BTreeMap<i64, ForeignKeyDef> = BTreeMap::new();
        for (id, parent, from, to, on_delete) in rows {
            let fk = grouped.entry(id).or_insert_with(|| ForeignKeyDef {
                columns: Vec::new(),
                parent,
                parent_columns: Vec::new(),
                on_delete,
            });
            fk.columns.push(from);
            fk.parent_columns.push(to);
        }
        table.foreign_keys = grouped.into_values().collect();

        let mut stmt = conn.prepare(
            "SELECT name, \"unique\" FROM pragma_index_list(?1) WHERE origin = 'c' ORDER BY name",
        )?;
        let indexes = stmt
            .query_map(params![name], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, bool>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for (index_name, unique) in indexes {
            let mut stmt =
                conn.prepare("SELECT name FROM pragma_index_info(?1) ORDER BY seqno")?;
            let columns = stmt
                .query_map(params![index_name], |row| row.get(0))?
                .collect::<std::result::Result<Vec<String>, _>>()?;
            schema.indexes.insert(IndexDef {
                name: index_name,
                table: name.clone(),
                columns,
                unique,
            });
        }

        schema.add_table(table);
    }

    Ok(schema)
}
