//! Catalog queries. Every result set is explicitly ordered. Columns from
//! `information_schema` are domain typed, so they are cast to plain types
//! both when selected and when compared with a bound parameter.

/// `$1` schema, `$2` include views.
pub(crate) const TABLES: &str = "\
SELECT t.table_name::text,
       t.table_type::text,
       t.is_insertable_into::text,
       pg_catalog.obj_description(c.oid, 'pg_class') AS comment
FROM   information_schema.tables t
JOIN   pg_catalog.pg_namespace n ON n.nspname = t.table_schema
JOIN   pg_catalog.pg_class c ON c.relnamespace = n.oid AND c.relname = t.table_name
WHERE  t.table_schema::text = $1
AND    (t.table_type = 'BASE TABLE' OR ($2 AND t.table_type = 'VIEW'))
ORDER  BY t.table_name";

/// `$1` schema, `$2` table.
pub(crate) const COLUMNS: &str = "\
SELECT c.ordinal_position::int4,
       c.column_name::text,
       c.is_nullable::text,
       c.data_type::text,
       c.character_maximum_length::int4,
       c.column_default::text,
       c.numeric_precision::int4,
       pg_catalog.col_description(
           format('%I.%I', c.table_schema, c.table_name)::regclass::oid,
           c.ordinal_position::int4
       ) AS comment
FROM   information_schema.columns c
WHERE  c.table_schema::text = $1
AND    c.table_name::text = $2
ORDER  BY c.ordinal_position";

/// `$1` schema, `$2` table. One row per (constraint, key column).
pub(crate) const CONSTRAINTS: &str = "\
SELECT tc.constraint_name::text,
       kc.column_name::text,
       tc.constraint_type::text,
       cc.table_name::text AS ref_table,
       cc.column_name::text AS ref_column
FROM   information_schema.table_constraints tc
JOIN   information_schema.key_column_usage kc
       ON  kc.constraint_schema = tc.constraint_schema
       AND kc.constraint_name = tc.constraint_name
       AND kc.table_schema = tc.table_schema
       AND kc.table_name = tc.table_name
JOIN   information_schema.constraint_column_usage cc
       ON  cc.constraint_schema = tc.constraint_schema
       AND cc.constraint_name = tc.constraint_name
WHERE  tc.table_schema::text = $1
AND    tc.table_name::text = $2
ORDER  BY tc.constraint_name, kc.ordinal_position, cc.column_name";

/// `$1` schema, `$2` table. Only indexes owned by the table.
pub(crate) const INDEXES: &str = "\
SELECT ic.relname::text,
       i.indkey::text,
       i.indisprimary,
       i.indisunique
FROM   pg_catalog.pg_index i
JOIN   pg_catalog.pg_class ic ON ic.oid = i.indexrelid
JOIN   pg_catalog.pg_class tc ON tc.oid = i.indrelid
JOIN   pg_catalog.pg_namespace n ON n.oid = tc.relnamespace
WHERE  n.nspname = $1
AND    tc.relname = $2
ORDER  BY ic.relname";
