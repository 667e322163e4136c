use chrono::Utc;
use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::{
    Entry, EntryChanges, EntryChangeset, NewEntry, NewEntryRow, RepositoryError,
};
use crate::db::DbPool;
use crate::schema::entries;

/// Record store for entries. Absence is reported as `None`/`false`, never as an error.
pub trait EntryRepository: Send + Sync {
    fn all(&self) -> Result<Vec<Entry>, RepositoryError>;
    fn find(&self, id: i32) -> Result<Option<Entry>, RepositoryError>;
    fn create(&self, entry: &NewEntry) -> Result<Entry, RepositoryError>;
    fn update(&self, id: i32, changes: &EntryChanges) -> Result<Option<Entry>, RepositoryError>;
    fn destroy(&self, id: i32) -> Result<bool, RepositoryError>;
    fn count(&self) -> Result<i64, RepositoryError>;
}

pub struct DieselEntryRepository {
    pool: DbPool,
}

impl DieselEntryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn find_with(conn: &mut SqliteConnection, id: i32) -> Result<Option<Entry>, DieselError> {
        entries::table
            .find(id)
            .select(Entry::as_select())
            .first(conn)
            .optional()
    }
}

type DieselError = diesel::result::Error;

impl EntryRepository for DieselEntryRepository {
    fn all(&self) -> Result<Vec<Entry>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows = entries::table
            .order(entries::id.asc())
            .select(Entry::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    fn find(&self, id: i32) -> Result<Option<Entry>, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(Self::find_with(&mut conn, id)?)
    }

    fn create(&self, entry: &NewEntry) -> Result<Entry, RepositoryError> {
        let mut conn = self.pool.get()?;
        let now = Utc::now().naive_utc();

        let created = conn.transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(entries::table)
                .values(&NewEntryRow {
                    word: &entry.word,
                    language: &entry.language,
                    definition: &entry.definition,
                    created_at: now,
                    updated_at: now,
                })
                .execute(conn)?;

            let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                .get_result::<i32>(conn)?;

            entries::table
                .find(id)
                .select(Entry::as_select())
                .first(conn)
        })?;

        Ok(created)
    }

    fn update(&self, id: i32, changes: &EntryChanges) -> Result<Option<Entry>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let changeset = EntryChangeset {
            word: changes.word.as_deref(),
            language: changes.language.as_deref(),
            definition: changes.definition.as_deref(),
            updated_at: Utc::now().naive_utc(),
        };

        let updated = conn.transaction::<_, DieselError, _>(|conn| {
            let affected = diesel::update(entries::table.find(id))
                .set(&changeset)
                .execute(conn)?;
            if affected == 0 {
                return Ok(None);
            }
            Self::find_with(conn, id)
        })?;

        Ok(updated)
    }

    fn destroy(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get()?;
        let deleted = diesel::delete(entries::table.find(id)).execute(&mut conn)?;
        Ok(deleted > 0)
    }

    fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(entries::table.count().get_result(&mut conn)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn new_entry(word: &str, language: &str, definition: &str) -> NewEntry {
        NewEntry {
            word: word.into(),
            language: language.into(),
            definition: definition.into(),
        }
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let repo = DieselEntryRepository::new(test_pool());
        let first = repo.create(&new_entry("ciao", "it", "hello")).unwrap();
        let second = repo.create(&new_entry("hola", "es", "hello")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.word, "ciao");
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn find_reports_missing_rows_as_none() {
        let repo = DieselEntryRepository::new(test_pool());
        assert_eq!(repo.find(42).unwrap(), None);
    }

    #[test]
    fn all_returns_rows_in_id_order() {
        let repo = DieselEntryRepository::new(test_pool());
        repo.create(&new_entry("chat", "fr", "cat")).unwrap();
        repo.create(&new_entry("Hund", "de", "dog")).unwrap();

        let words: Vec<String> = repo.all().unwrap().into_iter().map(|e| e.word).collect();
        assert_eq!(words, vec!["chat", "Hund"]);
    }

    #[test]
    fn update_changes_only_given_fields() {
        let repo = DieselEntryRepository::new(test_pool());
        let entry = repo.create(&new_entry("ciao", "it", "hello")).unwrap();

        let changes = EntryChanges {
            definition: Some("hello; goodbye".into()),
            ..Default::default()
        };
        let updated = repo.update(entry.id, &changes).unwrap().unwrap();

        assert_eq!(updated.word, "ciao");
        assert_eq!(updated.language, "it");
        assert_eq!(updated.definition, "hello; goodbye");
        assert_eq!(updated.created_at, entry.created_at);
        assert!(updated.updated_at >= entry.updated_at);
    }

    #[test]
    fn update_of_unknown_id_is_none() {
        let repo = DieselEntryRepository::new(test_pool());
        let changes = EntryChanges {
            word: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(repo.update(3, &changes).unwrap(), None);
    }

    #[test]
    fn destroy_removes_the_row() {
        let repo = DieselEntryRepository::new(test_pool());
        let entry = repo.create(&new_entry("ciao", "it", "hello")).unwrap();

        assert!(repo.destroy(entry.id).unwrap());
        assert!(!repo.destroy(entry.id).unwrap());
        assert_eq!(repo.find(entry.id).unwrap(), None);
        assert_eq!(repo.count().unwrap(), 0);
    }
}
