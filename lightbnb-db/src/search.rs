//! Property search query construction
//!
//! Filters are appended to a `sqlx::QueryBuilder`, which numbers the
//! placeholders itself. The first row predicate gets `WHERE`, the rest
//! `AND`; the rating bound goes into `HAVING` after grouping.

use lightbnb_core::PropertySearch;
use sqlx::{Postgres, QueryBuilder};

use crate::repos::PROPERTY_COLUMNS;

/// Build the search statement for `search`, capped at `limit` rows.
///
/// The join to `property_reviews` is an inner join, so properties with no
/// reviews never match, even with no filters at all.
pub fn search_query(search: &PropertySearch, limit: u32) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {PROPERTY_COLUMNS}, avg(property_reviews.rating)::float8 AS average_rating \
         FROM properties \
         JOIN property_reviews ON properties.id = property_reviews.property_id"
    ));

    push_filters(&mut builder, search);

    builder.push(" GROUP BY properties.id");
    if let Some(rating) = search.minimum_rating {
        builder.push(" HAVING avg(property_reviews.rating)::float8 >= ");
        builder.push_bind(rating);
    }

    builder.push(" ORDER BY properties.cost_per_night LIMIT ");
    builder.push_bind(i64::from(limit));
    builder
}

/// Append the row-level predicates (everything but the rating bound).
fn push_filters(builder: &mut QueryBuilder<'static, Postgres>, search: &PropertySearch) {
    // An empty city would become `LIKE '%%'`, which matches everything.
    let city = search.city.as_deref().filter(|city| !city.is_empty());
    let has_row_filters = city.is_some()
        || search.owner_id.is_some()
        || search.minimum_price_per_night.is_some()
        || search.maximum_price_per_night.is_some();
    if !has_row_filters {
        return;
    }

    builder.push(" WHERE ");
    let mut predicates = builder.separated(" AND ");

    if let Some(city) = city {
        predicates.push("properties.city LIKE ");
        predicates.push_bind_unseparated(format!("%{city}%"));
    }
    if let Some(owner_id) = search.owner_id {
        predicates.push("properties.owner_id = ");
        predicates.push_bind_unseparated(owner_id);
    }
    if let Some(minimum) = search.minimum_price_per_night {
        predicates.push("properties.cost_per_night >= ");
        predicates.push_bind_unseparated(minimum);
    }
    if let Some(maximum) = search.maximum_price_per_night {
        predicates.push("properties.cost_per_night <= ");
        predicates.push_bind_unseparated(maximum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_for(search: &PropertySearch, limit: u32) -> String {
        search_query(search, limit).sql().to_owned()
    }

    #[test]
    fn empty_city_adds_no_predicate() {
        let sql = sql_for(&PropertySearch::default().city(""), 10);
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("LIKE"));
        assert!(sql.ends_with("LIMIT $1"));

        let sql = sql_for(&PropertySearch::default().city("").owner(3), 10);
        assert!(sql.contains(" WHERE properties.owner_id = $1 GROUP BY"));
        assert!(!sql.contains("LIKE"));
    }

    #[test]
    fn no_filters_keeps_review_join() {
        let sql = sql_for(&PropertySearch::default(), 10);
        assert!(sql.contains("JOIN property_reviews ON properties.id = property_reviews.property_id"));
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("HAVING"));
        assert!(sql.ends_with("GROUP BY properties.id ORDER BY properties.cost_per_night LIMIT $1"));
    }

    #[test]
    fn city_only() {
        let sql = sql_for(&PropertySearch::default().city("van"), 5);
        assert!(sql.contains(" WHERE properties.city LIKE $1 GROUP BY properties.id"));
        assert!(sql.ends_with("LIMIT $2"));
    }

    #[test]
    fn owner_without_city_starts_with_where() {
        let sql = sql_for(&PropertySearch::default().owner(4), 10);
        assert!(sql.contains(" WHERE properties.owner_id = $1 GROUP BY"));
        assert!(!sql.contains("AND"));
    }

    #[test]
    fn later_filters_joined_with_and() {
        let search = PropertySearch::default()
            .city("Van")
            .owner(2)
            .price_between(Some(1000), Some(50000));
        let sql = sql_for(&search, 10);

        assert!(sql.contains(
            " WHERE properties.city LIKE $1 AND properties.owner_id = $2 \
             AND properties.cost_per_night >= $3 AND properties.cost_per_night <= $4 GROUP BY"
        ));
        assert!(sql.ends_with("LIMIT $5"));
    }

    #[test]
    fn price_bounds_without_other_filters() {
        let search = PropertySearch::default().price_between(None, Some(20000));
        let sql = sql_for(&search, 3);
        assert!(sql.contains(" WHERE properties.cost_per_night <= $1 GROUP BY"));
        assert!(sql.ends_with("LIMIT $2"));
    }

    #[test]
    fn rating_goes_into_having_after_group_by() {
        let search = PropertySearch::default().city("Calgary").minimum_rating(4.0);
        let sql = sql_for(&search, 10);

        let group = sql.find("GROUP BY").unwrap();
        let having = sql.find("HAVING avg(property_reviews.rating)::float8 >= $2").unwrap();
        let order = sql.find("ORDER BY properties.cost_per_night").unwrap();
        assert!(group < having && having < order);
        assert!(sql.ends_with("LIMIT $3"));
    }

    #[test]
    fn rating_only_has_no_where() {
        let sql = sql_for(&PropertySearch::default().minimum_rating(4.0), 10);
        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("HAVING avg(property_reviews.rating)::float8 >= $1"));
        assert!(sql.ends_with("LIMIT $2"));
    }
}
