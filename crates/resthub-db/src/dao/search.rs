//! Shared SQL for paged searches

use resthub_core::error::DomainError;
use resthub_core::paging::{Page, PageRequest};
use resthub_core::query::{QueryError, SearchQuery};
use resthub_core::traits::RepoResult;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::error::map_db_error;

/// Append a `WHERE` clause for `query` (nothing when it is empty)
///
/// Field names come from `fields`, never from the query text.
pub(crate) fn push_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    query: &SearchQuery,
    fields: &[&'static str],
) -> RepoResult<()> {
    for (i, term) in query.terms().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });

        let columns: Vec<&'static str> = match &term.field {
            Some(field) => {
                let column = fields
                    .iter()
                    .find(|f| **f == field.as_str())
                    .copied()
                    .ok_or_else(|| DomainError::from(QueryError::UnknownField(field.clone())))?;
                vec![column]
            }
            None => fields.to_vec(),
        };

        let pattern = term.like_pattern();
        builder.push("(");
        for (j, column) in columns.iter().enumerate() {
            if j > 0 {
                builder.push(" OR ");
            }
            builder.push(*column).push(" ILIKE ").push_bind(pattern.clone());
        }
        builder.push(")");
    }
    Ok(())
}

/// Count and fetch one page of `table` rows matching `query`, ordered by id
pub(crate) async fn find_page<M, T>(
    pool: &PgPool,
    table: &str,
    columns: &str,
    fields: &[&'static str],
    query: &SearchQuery,
    request: PageRequest,
) -> RepoResult<Page<T>>
where
    M: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    T: From<M>,
{
    let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {table}"));
    push_filter(&mut count, query, fields)?;
    let total: i64 = count
        .build_query_scalar()
        .fetch_one(pool)
        .await
        .map_err(map_db_error)?;

    let offset = i64::try_from(request.offset()).map_err(|_| {
        DomainError::InvalidPageRequest(format!("offset out of range: {}", request.offset()))
    })?;

    let mut select = QueryBuilder::<Postgres>::new(format!("SELECT {columns} FROM {table}"));
    push_filter(&mut select, query, fields)?;
    select
        .push(" ORDER BY id LIMIT ")
        .push_bind(i64::from(request.size()))
        .push(" OFFSET ")
        .push_bind(offset);

    let rows = select
        .build_query_as::<M>()
        .fetch_all(pool)
        .await
        .map_err(map_db_error)?;

    Ok(Page::new(
        rows.into_iter().map(T::from).collect(),
        request,
        total.max(0) as u64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["name", "city"];

    fn sql_for(raw: &str) -> String {
        let query = SearchQuery::parse(raw, FIELDS).unwrap();
        let mut builder = QueryBuilder::<Postgres>::new("SELECT id FROM hotels");
        push_filter(&mut builder, &query, FIELDS).unwrap();
        builder.sql().to_string()
    }

    #[test]
    fn test_empty_query_has_no_where() {
        assert_eq!(sql_for(""), "SELECT id FROM hotels");
    }

    #[test]
    fn test_unqualified_term_spans_fields() {
        assert_eq!(
            sql_for("atlanta"),
            "SELECT id FROM hotels WHERE (name ILIKE $1 OR city ILIKE $2)"
        );
    }

    #[test]
    fn test_terms_are_anded() {
        assert_eq!(
            sql_for("city:miami conrad"),
            "SELECT id FROM hotels WHERE (city ILIKE $1) AND (name ILIKE $2 OR city ILIKE $3)"
        );
    }

    #[test]
    fn test_foreign_field_rejected() {
        let query = SearchQuery::parse("zip:1", &["zip"]).unwrap();
        let mut builder = QueryBuilder::<Postgres>::new("SELECT id FROM hotels");
        let err = push_filter(&mut builder, &query, FIELDS).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuery(QueryError::UnknownField(_))));
    }
}
