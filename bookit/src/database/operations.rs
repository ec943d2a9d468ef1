//! Database operations for actors, resources, and reservations.
//!
//! Reads are associated functions taking a `&Connection` so they work the
//! same on a plain connection and inside a transaction.

use chrono::{DateTime, Utc};
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::catalog::{Actor, Resource};
use crate::error::Result;
use crate::listing::Page;
use crate::reservation::{
    ActorId, ActorSummary, NewReservation, Reservation, ReservationId, ResourceId,
    ResourceSummary, Status,
};
use crate::store::ReservationFilter;

use super::connection::Database;
use super::schema::{INSERT_RESERVATION, SELECT_RESERVATION_VIEW, TRANSITION_STATUS};

/// Converts an instant to Unix epoch milliseconds for storage.
pub(crate) fn to_millis(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

/// Converts stored Unix epoch milliseconds back to an instant.
fn from_millis(column: usize, millis: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            Type::Integer,
            format!("timestamp {millis} out of range").into(),
        )
    })
}

/// Deserializes a reservation from a row of [`SELECT_RESERVATION_VIEW`].
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let start = from_millis(1, row.get(1)?)?;
    let end = from_millis(2, row.get(2)?)?;
    let status: String = row.get(3)?;
    let status = status
        .parse::<Status>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    let resource = ResourceSummary {
        id: ResourceId::new(row.get(4)?),
        name: row.get(5)?,
        owner: ActorId::new(row.get(6)?),
    };
    let requester = ActorSummary {
        id: ActorId::new(row.get(7)?),
        name: row.get(8)?,
    };

    Reservation::builder(ReservationId::new(id), start, end)
        .status(status)
        .resource(resource)
        .requester(requester)
        .build()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Integer, Box::new(e)))
}

/// Appends the predicate for `filter` to `sql`.
///
/// Time predicates follow the classifier: `CURRENT` is inclusive on both
/// bounds, `PAST` is `end < now`, `FUTURE` is `start > now`.
fn push_filter(sql: &mut String, values: &mut Vec<Value>, filter: ReservationFilter) {
    match filter {
        ReservationFilter::All => {}
        ReservationFilter::Current(now) => {
            sql.push_str(" AND r.start_at <= ? AND r.end_at >= ?");
            values.push(Value::Integer(to_millis(now)));
            values.push(Value::Integer(to_millis(now)));
        }
        ReservationFilter::Past(now) => {
            sql.push_str(" AND r.end_at < ?");
            values.push(Value::Integer(to_millis(now)));
        }
        ReservationFilter::Future(now) => {
            sql.push_str(" AND r.start_at > ?");
            values.push(Value::Integer(to_millis(now)));
        }
        ReservationFilter::Status(status) => {
            sql.push_str(" AND r.status = ?");
            values.push(Value::Text(status.as_str().to_string()));
        }
    }
}

/// Appends `r.resource_id IN (?, ...)` for the given set.
fn push_resource_set(sql: &mut String, values: &mut Vec<Value>, resources: &[ResourceId]) {
    let placeholders = vec!["?"; resources.len()].join(", ");
    sql.push_str(&format!("r.resource_id IN ({placeholders})"));
    values.extend(resources.iter().map(|id| Value::Integer(id.value())));
}

/// Appends newest-start-first ordering and the optional page window.
fn push_order_and_page(sql: &mut String, values: &mut Vec<Value>, page: Option<Page>) {
    sql.push_str(" ORDER BY r.start_at DESC, r.id DESC");
    if let Some(page) = page {
        sql.push_str(" LIMIT ? OFFSET ?");
        values.push(Value::Integer(page.size()));
        values.push(Value::Integer(page.offset()));
    }
}

fn query_reservations(conn: &Connection, sql: &str, values: &[Value]) -> Result<Vec<Reservation>> {
    let mut stmt = conn.prepare(sql)?;
    let reservations = stmt
        .query_map(params_from_iter(values.iter()), row_to_reservation)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
    Ok(reservations)
}

const SELECT_ACTOR: &str = "SELECT id, name FROM actors WHERE id = ?";

const SELECT_RESOURCE: &str = "SELECT id, owner_id, name, available FROM resources WHERE id = ?";

const SELECT_OWNED_RESOURCE_IDS: &str = "SELECT id FROM resources WHERE owner_id = ? ORDER BY id";

const SELECT_APPROVED_OVERLAPPING: &str = r"
    SELECT id FROM reservations
    WHERE resource_id = ? AND status = 'APPROVED' AND start_at < ? AND end_at > ?
    ORDER BY start_at, id
";

/// Upper bound on ids bound into one `IN (...)` list.
///
/// Well below `SQLite`'s bound-parameter limit (32766 in the bundled
/// build), leaving room for the other predicates.
const MAX_IDS_PER_STATEMENT: usize = 500;

const CHECK_COMPLETED_RESERVATION: &str = r"
    SELECT EXISTS(
        SELECT 1 FROM reservations
        WHERE requester_id = ? AND resource_id = ? AND status = 'APPROVED' AND end_at < ?
    )
";

impl Database {
    /// Registers an actor and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_actor(conn: &Connection, name: &str) -> Result<ActorId> {
        conn.execute("INSERT INTO actors (name) VALUES (?)", [name])?;
        Ok(ActorId::new(conn.last_insert_rowid()))
    }

    /// Registers a resource and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when `owner` does
    /// not exist.
    pub fn insert_resource(
        conn: &Connection,
        owner: ActorId,
        name: &str,
        available: bool,
    ) -> Result<ResourceId> {
        conn.execute(
            "INSERT INTO resources (owner_id, name, available) VALUES (?, ?, ?)",
            params![owner.value(), name, available],
        )?;
        Ok(ResourceId::new(conn.last_insert_rowid()))
    }

    /// Looks up an actor by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_actor(conn: &Connection, id: ActorId) -> Result<Option<Actor>> {
        let actor = conn
            .query_row(SELECT_ACTOR, [id.value()], |row| {
                Ok(Actor {
                    id: ActorId::new(row.get(0)?),
                    name: row.get(1)?,
                })
            })
            .optional()?;
        Ok(actor)
    }

    /// Looks up a resource by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_resource(conn: &Connection, id: ResourceId) -> Result<Option<Resource>> {
        let resource = conn
            .query_row(SELECT_RESOURCE, [id.value()], |row| {
                Ok(Resource {
                    id: ResourceId::new(row.get(0)?),
                    owner: ActorId::new(row.get(1)?),
                    name: row.get(2)?,
                    available: row.get(3)?,
                })
            })
            .optional()?;
        Ok(resource)
    }

    /// Returns the ids of every resource owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_owned_resource_ids(conn: &Connection, owner: ActorId) -> Result<Vec<ResourceId>> {
        let mut stmt = conn.prepare(SELECT_OWNED_RESOURCE_IDS)?;
        let ids = stmt
            .query_map([owner.value()], |row| row.get(0).map(ResourceId::new))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(ids)
    }

    /// Persists a new reservation in WAITING status.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_reservation(conn: &Connection, new: &NewReservation) -> Result<ReservationId> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                new.resource().value(),
                new.requester().value(),
                to_millis(new.start()),
                to_millis(new.end()),
                Status::Waiting.as_str(),
            ],
        )?;
        Ok(ReservationId::new(conn.last_insert_rowid()))
    }

    /// Moves a reservation from `from` to `to` if it is still in `from`.
    ///
    /// Returns `false` when the stored status no longer matches, which means
    /// another writer got there first.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn transition_status(
        conn: &Connection,
        id: ReservationId,
        from: Status,
        to: Status,
    ) -> Result<bool> {
        let rows = conn.execute(TRANSITION_STATUS, params![id.value(), to.as_str(), from.as_str()])?;
        Ok(rows > 0)
    }

    /// Fetches a reservation view by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        let sql = format!("{SELECT_RESERVATION_VIEW} WHERE r.id = ?");
        let reservation = conn
            .query_row(&sql, [id.value()], row_to_reservation)
            .optional()?;
        Ok(reservation)
    }

    /// Lists a requester's reservations matching `filter`, newest start first.
    ///
    /// With `page = None` every match is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query_by_requester(
        conn: &Connection,
        requester: ActorId,
        filter: ReservationFilter,
        page: Option<Page>,
    ) -> Result<Vec<Reservation>> {
        let mut sql = format!("{SELECT_RESERVATION_VIEW} WHERE r.requester_id = ?");
        let mut values = vec![Value::Integer(requester.value())];
        push_filter(&mut sql, &mut values, filter);
        push_order_and_page(&mut sql, &mut values, page);

        log::debug!("requester {requester} query: {filter:?} {page:?}");
        query_reservations(conn, &sql, &values)
    }

    /// Lists reservations on any of `resources` matching `filter`, newest
    /// start first.
    ///
    /// The whole set is bound into one statement so that ordering and the
    /// page window apply across it; a set larger than `SQLite`'s
    /// bound-parameter limit fails with a database error.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query_by_resources(
        conn: &Connection,
        resources: &[ResourceId],
        filter: ReservationFilter,
        page: Option<Page>,
    ) -> Result<Vec<Reservation>> {
        if resources.is_empty() {
            return Ok(Vec::new());
        }

        let mut sql = format!("{SELECT_RESERVATION_VIEW} WHERE ");
        let mut values = Vec::with_capacity(resources.len() + 3);
        push_resource_set(&mut sql, &mut values, resources);
        push_filter(&mut sql, &mut values, filter);
        push_order_and_page(&mut sql, &mut values, page);

        log::debug!(
            "resource set query over {} resource(s): {filter:?} {page:?}",
            resources.len()
        );
        query_reservations(conn, &sql, &values)
    }

    /// Batched lookup of APPROVED reservations with `start < now`.
    ///
    /// Large id sets are split into statements of at most
    /// `MAX_IDS_PER_STATEMENT` ids inside the one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query_approved_before(
        conn: &Connection,
        resources: &[ResourceId],
        now: DateTime<Utc>,
    ) -> Result<Vec<Reservation>> {
        Self::query_approved(conn, resources, "r.start_at < ?", now)
    }

    /// Batched lookup of APPROVED reservations with `start > now`.
    ///
    /// Split into bounded statements like [`Self::query_approved_before`].
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query_approved_after(
        conn: &Connection,
        resources: &[ResourceId],
        now: DateTime<Utc>,
    ) -> Result<Vec<Reservation>> {
        Self::query_approved(conn, resources, "r.start_at > ?", now)
    }

    fn query_approved(
        conn: &Connection,
        resources: &[ResourceId],
        predicate: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Reservation>> {
        let mut reservations = Vec::new();
        for chunk in resources.chunks(MAX_IDS_PER_STATEMENT) {
            let mut sql = format!("{SELECT_RESERVATION_VIEW} WHERE ");
            let mut values = Vec::with_capacity(chunk.len() + 2);
            push_resource_set(&mut sql, &mut values, chunk);
            sql.push_str(" AND r.status = ? AND ");
            sql.push_str(predicate);
            sql.push_str(" ORDER BY r.resource_id, r.start_at");
            values.push(Value::Text(Status::Approved.as_str().to_string()));
            values.push(Value::Integer(to_millis(now)));

            reservations.extend(query_reservations(conn, &sql, &values)?);
        }
        Ok(reservations)
    }

    /// Ids of APPROVED reservations on `resource` overlapping `[start, end)`.
    ///
    /// Touching intervals (one ends exactly when the other starts) do not
    /// overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query_approved_overlapping(
        conn: &Connection,
        resource: ResourceId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReservationId>> {
        let mut stmt = conn.prepare(SELECT_APPROVED_OVERLAPPING)?;
        let ids = stmt
            .query_map(
                params![resource.value(), to_millis(end), to_millis(start)],
                |row| row.get(0).map(ReservationId::new),
            )?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(ids)
    }

    /// Whether `requester` holds an APPROVED reservation on `resource` that
    /// ended before `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn has_completed_reservation(
        conn: &Connection,
        requester: ActorId,
        resource: ResourceId,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let exists = conn.query_row(
            CHECK_COMPLETED_RESERVATION,
            params![requester.value(), resource.value(), to_millis(now)],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}
