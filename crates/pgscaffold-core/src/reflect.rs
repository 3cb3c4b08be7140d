use crate::{
    catalog::{Catalog, ColumnRow, ConstraintRow, IndexRow, TableRow},
    schema::{parse_index_key, Column, Constraint, Index, Schema, Table},
    Error, Result,
};

use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// Options that change what reflection collects.
#[derive(Debug, Default, Clone)]
pub struct ReflectOptions {
    /// Also reflect views. Their columns start out filterable.
    pub include_views: bool,

    /// Owner written to the IR. Defaults to the schema name.
    pub owner: Option<String>,
}

impl ReflectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_views(mut self, include_views: bool) -> Self {
        self.include_views = include_views;
        self
    }

    pub fn owner(mut self, owner: Option<String>) -> Self {
        self.owner = owner;
        self
    }
}

/// Builds the IR for one schema from catalog metadata.
///
/// Queries run one at a time: the table list, then for each table its
/// columns, constraints and indexes. The first failure aborts the whole
/// reflection; no partial schema is ever returned.
#[derive(Debug)]
pub struct Reflector<'a, C: ?Sized> {
    catalog: &'a C,
    options: ReflectOptions,
}

impl<'a, C> Reflector<'a, C>
where
    C: Catalog + Sync + ?Sized,
{
    pub fn new(catalog: &'a C, options: ReflectOptions) -> Self {
        Self { catalog, options }
    }

    pub async fn reflect(&self, schema_name: &str) -> Result<Schema> {
        let mut schema = Schema::new(schema_name);
        if let Some(owner) = &self.options.owner {
            schema.owner = owner.clone();
        }

        info!(schema = schema_name, "scanning schema");

        let rows = self
            .catalog
            .tables(schema_name, self.options.include_views)
            .await
            .map_err(|e| e.context(format!("listing tables of schema `{schema_name}`")))?;

        for row in rows {
            let qualified = format!("{schema_name}.{}", row.name);
            let table = self
                .reflect_table(&schema, row)
                .await
                .map_err(|e| e.context(format!("reflecting `{qualified}`")))?;

            schema.tables.push(table);
        }

        Ok(schema)
    }

    async fn reflect_table(&self, schema: &Schema, row: TableRow) -> Result<Table> {
        info!(table = %row.name, kind = %row.table_type.to_lowercase(), "scanning table");

        let mut table = Table::new(&schema.schema_name, &row.name);
        table.owner = schema.owner.clone();
        table.comment = row.comment.as_deref().unwrap_or_default().trim().to_string();
        table.is_updatable = row.is_insertable_into.eq_ignore_ascii_case("yes");
        table.table_type = row.table_type;

        let columns = self
            .catalog
            .columns(&schema.schema_name, &table.table_name)
            .await?;
        table.columns = build_columns(columns, table.is_view())?;

        let constraints = self
            .catalog
            .constraints(&schema.schema_name, &table.table_name)
            .await?;
        table.constraints = fold_constraints(constraints);

        let indexes = self
            .catalog
            .indexes(&schema.schema_name, &table.table_name)
            .await?;
        for row in indexes {
            let index = build_index(&table, row)?;
            table.apply_index(&index);
            table.indexes.push(index);
        }

        for dependency in table
            .columns
            .iter()
            .filter_map(|c| c.data_type.dependency())
            .collect::<Vec<_>>()
        {
            table.add_dependency(dependency);
        }

        Ok(table)
    }
}

/// Reflects `schema_name` with default options.
pub async fn reflect<C>(catalog: &C, schema_name: &str) -> Result<Schema>
where
    C: Catalog + Sync + ?Sized,
{
    Reflector::new(catalog, ReflectOptions::default())
        .reflect(schema_name)
        .await
}

fn build_columns(rows: Vec<ColumnRow>, is_view: bool) -> Result<Vec<Column>> {
    let mut columns = Vec::with_capacity(rows.len());

    for row in rows {
        let nullable = row.is_nullable.eq_ignore_ascii_case("yes");
        let column = Column::new(row.position, &row.name, &row.data_type, nullable)
            .map_err(|e| e.context(format!("column `{}`", row.name)))?
            .max_len(row.max_len)
            .default_value(row.default)
            .numeric_precision(row.numeric_precision)
            .comment(row.comment.unwrap_or_default())
            .can_filter(is_view);

        columns.push(column);
    }

    // The catalog orders by position already; this only guards fakes and
    // odd drivers. Positions are unique per table.
    columns.sort_by_key(|c| c.position);
    if let Some(pair) = columns.windows(2).find(|w| w[0].position == w[1].position) {
        return Err(Error::query_message(format!(
            "columns `{}` and `{}` share ordinal position {}",
            pair[0].column_name, pair[1].column_name, pair[0].position
        )));
    }

    Ok(columns)
}

/// Folds one-row-per-column constraint metadata into one record per name.
///
/// Kind flags and the reference target come from the first row seen for a
/// name; later rows only contribute column names.
fn fold_constraints(rows: Vec<ConstraintRow>) -> Vec<Constraint> {
    let mut folded: IndexMap<String, Constraint> = IndexMap::new();

    for row in rows {
        let constraint = folded.entry(row.name.clone()).or_insert_with(|| {
            debug!(constraint = %row.name, kind = %row.constraint_type, "found constraint");
            Constraint::new(&row.name, &row.constraint_type).references(&row.ref_table, &row.ref_column)
        });

        constraint.push_column(&row.column_name);
    }

    folded.into_values().collect()
}

fn build_index(table: &Table, row: IndexRow) -> Result<Index> {
    let mut index = Index::new(&row.name, row.is_primary, row.is_unique);

    for position in parse_index_key(&row.key)? {
        if position == 0 {
            warn!(index = %row.name, "skipping expression entry in index key");
            continue;
        }

        let column = table.column_at(position).ok_or_else(|| {
            Error::query_message(format!(
                "index `{}` refers to column position {position}, which `{}` does not have",
                row.name, table.table_name
            ))
        })?;

        index.column_names.push(column.column_name.clone());
    }

    debug!(index = %index.index_name, columns = ?index.column_names, "found index");

    Ok(index)
}
