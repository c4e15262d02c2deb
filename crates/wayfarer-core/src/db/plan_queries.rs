//! Plan CRUD operations and queries.

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, EngineError, Result},
    models::{NewPlan, NewStop, Plan, PlanFilter, PlanStatus, PlanSummary, StopStatus},
};

// SQL queries as const strings for compile-time optimization
const INSERT_PLAN_SQL: &str = "INSERT INTO plans (traveler, name, from_date, to_date, lodging_id, estimated_cost, is_public, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_PLAN_SQL: &str = "SELECT id, traveler, name, from_date, to_date, lodging_id, actual_lodging_id, estimated_cost, actual_cost, is_public, status, created_at, updated_at FROM plans WHERE id = ?1";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const UPDATE_PLAN_STATUS_SQL: &str = "UPDATE plans SET status = ?1, updated_at = ?2 WHERE id = ?3";
const PROMOTE_PLAN_SQL: &str =
    "UPDATE plans SET name = ?1, status = ?2, updated_at = ?3 WHERE id = ?4";
const DELETE_SIBLING_SMART_STOPS_SQL: &str = "DELETE FROM stops WHERE plan_id IN (SELECT id FROM plans WHERE traveler = ?1 AND status = ?2 AND id != ?3)";
const DELETE_SIBLING_SMART_PLANS_SQL: &str =
    "DELETE FROM plans WHERE traveler = ?1 AND status = ?2 AND id != ?3";
const DELETE_SMART_STOPS_SQL: &str =
    "DELETE FROM stops WHERE plan_id IN (SELECT id FROM plans WHERE traveler = ?1 AND status = ?2)";
const DELETE_SMART_PLANS_SQL: &str = "DELETE FROM plans WHERE traveler = ?1 AND status = ?2";
const COMMIT_STOPS_SQL: &str =
    "UPDATE stops SET status = ?1, updated_at = ?2 WHERE plan_id = ?3 AND is_planned = 1";
const COMMIT_PLAN_SQL: &str =
    "UPDATE plans SET status = ?1, to_date = ?2, updated_at = ?3 WHERE id = ?4";
const UPDATE_STOP_STATUS_SQL: &str = "UPDATE stops SET status = ?1, updated_at = ?2 WHERE id = ?3";
const FINALIZE_PLAN_SQL: &str = "UPDATE plans SET status = ?1, actual_cost = ?2, actual_lodging_id = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_PLAN_STOPS_SQL: &str = "DELETE FROM stops WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

const PLAN_SUMMARY_COLUMNS: &str = "id, traveler, name, from_date, to_date, estimated_cost, actual_cost, status, created_at, updated_at, planned_stops, checked_stops";
const PLAN_SUMMARIES_VIEW: &str = "plan_summaries";

impl super::Database {
    /// Helper function to construct a Plan from a database row (stops not
    /// loaded).
    pub(super) fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
        let status_str: String = row.get(10)?;
        let status = status_str.parse::<PlanStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                10,
                Type::Text,
                format!("Invalid plan status: {status_str}").into(),
            )
        })?;

        Ok(Plan {
            id: row.get::<_, i64>(0)? as u64,
            traveler: row.get(1)?,
            name: row.get(2)?,
            from_date: row.get::<_, String>(3)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
            to_date: row.get::<_, String>(4)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            lodging_id: row.get::<_, Option<i64>>(5)?.map(|v| v as u64),
            actual_lodging_id: row.get::<_, Option<i64>>(6)?.map(|v| v as u64),
            estimated_cost: row.get(7)?,
            actual_cost: row.get(8)?,
            is_public: row.get(9)?,
            status,
            created_at: row.get::<_, String>(11)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(12)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(12, Type::Text, Box::new(e))
            })?,
            stops: Vec::new(),
        })
    }

    /// Creates a new plan together with its stops in one transaction.
    pub fn create_plan(&mut self, new_plan: &NewPlan, stops: &[NewStop]) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        let id = Self::insert_plan_in_tx(&tx, new_plan, &now_str)?;
        for stop in stops {
            Self::insert_stop_in_tx(&tx, id, stop, &now_str)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_plan(id)?.ok_or(EngineError::PlanNotFound { id })
    }

    /// Inserts a plan row inside an open transaction and returns its ID.
    pub(super) fn insert_plan_in_tx(
        tx: &rusqlite::Transaction,
        new_plan: &NewPlan,
        now_str: &str,
    ) -> Result<u64> {
        tx.execute(
            INSERT_PLAN_SQL,
            params![
                &new_plan.traveler,
                &new_plan.name,
                new_plan.from_date.to_string(),
                new_plan.to_date.to_string(),
                new_plan.lodging_id.map(|v| v as i64),
                new_plan.estimated_cost,
                new_plan.is_public,
                new_plan.status.as_str(),
                now_str,
                now_str
            ],
        )
        .map_err(|e| EngineError::database_error("Failed to insert plan", e))?;

        Ok(tx.last_insert_rowid() as u64)
    }

    /// Retrieves a plan by its ID with stops eagerly loaded.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .map_err(|e| EngineError::database_error("Failed to prepare query", e))?;

        let mut plan = stmt
            .query_row(params![id as i64], Self::build_plan_from_row)
            .optional()
            .map_err(|e| EngineError::database_error("Failed to query plan", e))?;

        if let Some(ref mut plan) = plan {
            plan.stops = self.get_stops(plan.id)?;
        }

        Ok(plan)
    }

    /// Lists plan summaries with optional filtering, newest first.
    pub fn list_plans(&self, filter: Option<&PlanFilter>) -> Result<Vec<PlanSummary>> {
        let mut query = format!("SELECT {PLAN_SUMMARY_COLUMNS} FROM {PLAN_SUMMARIES_VIEW}");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref traveler) = f.traveler {
                conditions.push("traveler = ?");
                params_vec.push(Box::new(traveler.clone()));
            }

            if let Some(ref name) = f.name_contains {
                conditions.push("name LIKE ?");
                params_vec.push(Box::new(format!("%{name}%")));
            }

            if let Some(ref status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str().to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| EngineError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries = stmt
            .query_map(&params_refs[..], |row| {
                let status_str: String = row.get(7)?;
                let status = status_str.parse::<PlanStatus>().map_err(|_| {
                    rusqlite::Error::FromSqlConversionFailure(
                        7,
                        Type::Text,
                        format!("Invalid plan status: {status_str}").into(),
                    )
                })?;

                Ok(PlanSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    traveler: row.get(1)?,
                    name: row.get(2)?,
                    from_date: row.get::<_, String>(3)?.parse::<Date>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
                    })?,
                    to_date: row.get::<_, String>(4)?.parse::<Date>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
                    })?,
                    estimated_cost: row.get(5)?,
                    actual_cost: row.get(6)?,
                    status,
                    created_at: row.get::<_, String>(8)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e))
                    })?,
                    updated_at: row.get::<_, String>(9)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e))
                    })?,
                    planned_stops: row.get::<_, i64>(10)? as u32,
                    checked_stops: row.get::<_, i64>(11)? as u32,
                })
            })
            .map_err(|e| EngineError::database_error("Failed to query plans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| EngineError::database_error("Failed to fetch plans", e))?;

        Ok(summaries)
    }

    /// Replaces a traveler's smart batch: deletes any existing smart plans
    /// and inserts the new batch, all in one transaction. Returns the IDs of
    /// the inserted plans.
    pub fn replace_smart_batch(
        &mut self,
        traveler: &str,
        batch: &[(NewPlan, Vec<NewStop>)],
    ) -> Result<Vec<u64>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let smart = PlanStatus::Smart.as_str();
        tx.execute(DELETE_SMART_STOPS_SQL, params![traveler, smart])
            .map_err(|e| EngineError::database_error("Failed to delete stale smart stops", e))?;
        tx.execute(DELETE_SMART_PLANS_SQL, params![traveler, smart])
            .map_err(|e| EngineError::database_error("Failed to delete stale smart plans", e))?;

        let now_str = Timestamp::now().to_string();
        let mut ids = Vec::with_capacity(batch.len());
        for (new_plan, stops) in batch {
            let id = Self::insert_plan_in_tx(&tx, new_plan, &now_str)?;
            for stop in stops {
                Self::insert_stop_in_tx(&tx, id, stop, &now_str)?;
            }
            ids.push(id);
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ids)
    }

    /// Promotes a smart plan to draft under a new name and discards the
    /// traveler's sibling smart plans, all in one transaction.
    pub fn promote_smart(&mut self, id: u64, traveler: &str, name: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        tx.execute(
            PROMOTE_PLAN_SQL,
            params![name, PlanStatus::Draft.as_str(), &now_str, id as i64],
        )
        .map_err(|e| EngineError::database_error("Failed to promote plan", e))?;

        let smart = PlanStatus::Smart.as_str();
        tx.execute(
            DELETE_SIBLING_SMART_STOPS_SQL,
            params![traveler, smart, id as i64],
        )
        .map_err(|e| EngineError::database_error("Failed to delete sibling smart stops", e))?;
        tx.execute(
            DELETE_SIBLING_SMART_PLANS_SQL,
            params![traveler, smart, id as i64],
        )
        .map_err(|e| EngineError::database_error("Failed to delete sibling smart plans", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Commits a draft: marks its planned stops immutable and advances the
    /// plan to the committed status with the given end date.
    pub fn commit_plan(&mut self, id: u64, to_date: Date) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        tx.execute(
            COMMIT_STOPS_SQL,
            params![StopStatus::Planned.as_str(), &now_str, id as i64],
        )
        .map_err(|e| EngineError::database_error("Failed to mark stops planned", e))?;
        tx.execute(
            COMMIT_PLAN_SQL,
            params![
                PlanStatus::Planned.as_str(),
                to_date.to_string(),
                &now_str,
                id as i64
            ],
        )
        .map_err(|e| EngineError::database_error("Failed to commit plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Updates a plan's lifecycle status.
    pub fn update_plan_status(&mut self, id: u64, status: PlanStatus) -> Result<()> {
        let now_str = Timestamp::now().to_string();
        self.connection
            .execute(
                UPDATE_PLAN_STATUS_SQL,
                params![status.as_str(), &now_str, id as i64],
            )
            .map_err(|e| EngineError::database_error("Failed to update plan status", e))?;
        Ok(())
    }

    /// Finalizes a completed trip: inserts the remaining actual stops,
    /// applies the reconciliation statuses to the planned stops, and writes
    /// the actual cost and lodging onto the plan — all in one transaction.
    pub fn finalize_trip(
        &mut self,
        id: u64,
        new_stops: &[NewStop],
        stop_updates: &[(u64, StopStatus)],
        actual_cost: i64,
        actual_lodging_id: Option<u64>,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        for stop in new_stops {
            Self::insert_stop_in_tx(&tx, id, stop, &now_str)?;
        }
        for (stop_id, status) in stop_updates {
            tx.execute(
                UPDATE_STOP_STATUS_SQL,
                params![status.as_str(), &now_str, *stop_id as i64],
            )
            .map_err(|e| EngineError::database_error("Failed to update stop status", e))?;
        }
        tx.execute(
            FINALIZE_PLAN_SQL,
            params![
                PlanStatus::Completed.as_str(),
                actual_cost,
                actual_lodging_id.map(|v| v as i64),
                &now_str,
                id as i64
            ],
        )
        .map_err(|e| EngineError::database_error("Failed to finalize plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Permanently deletes a plan and all its associated stops.
    /// This operation cannot be undone.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        // Check if plan exists
        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| EngineError::database_error("Failed to check plan existence", e))?;

        if !exists {
            return Err(EngineError::PlanNotFound { id });
        }

        // Delete all stops associated with this plan first
        // (Foreign key constraints should handle this automatically, but we'll be
        // explicit)
        tx.execute(DELETE_PLAN_STOPS_SQL, params![id as i64])
            .map_err(|e| EngineError::database_error("Failed to delete plan stops", e))?;

        // Delete the plan itself
        tx.execute(DELETE_PLAN_SQL, params![id as i64])
            .map_err(|e| EngineError::database_error("Failed to delete plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
