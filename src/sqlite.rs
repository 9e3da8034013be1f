//! rusqlite bindings for [`Null`].
//!
//! A SQL `NULL` reads back as an invalid [`Null`], anything else is handed
//! to the payload type. Writing an invalid [`Null`] binds a SQL `NULL`.

use crate::Null;
use rusqlite::{
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
    Result, Row, RowIndex, ToSql,
};
use std::fmt::Debug;

impl<T> FromSql for Null<T>
where
    T: FromSql + Default,
{
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Self::null()),
            v => T::column_result(v).map(Self::new),
        }
    }
}

impl<T: ToSql> ToSql for Null<T> {
    fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
        match self.as_option() {
            Some(v) => v.to_sql(),
            None => Ok(ToSqlOutput::Borrowed(ValueRef::Null)),
        }
    }
}

/// Zero-default column access on a result row.
pub trait NullColumnExt {
    /// Reads a nullable column into a [`Null`].
    fn get_null<I, T>(&self, idx: I) -> Result<Null<T>>
    where
        I: RowIndex,
        T: FromSql + Default;

    /// Reads a nullable column, substituting the zero value of `T` for `NULL`.
    fn get_or_default<I, T>(&self, idx: I) -> Result<T>
    where
        I: RowIndex + Copy + Debug,
        T: FromSql + Default;
}

impl NullColumnExt for Row<'_> {
    fn get_null<I, T>(&self, idx: I) -> Result<Null<T>>
    where
        I: RowIndex,
        T: FromSql + Default,
    {
        self.get(idx)
    }

    fn get_or_default<I, T>(&self, idx: I) -> Result<T>
    where
        I: RowIndex + Copy + Debug,
        T: FromSql + Default,
    {
        let n: Null<T> = self.get(idx)?;

        if !n.valid {
            tracing::trace!(column = ?idx, "null column, using zero value");
        }

        Ok(crate::deref_null(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NullInt64, NullString};
    use rusqlite::{params, Connection};

    fn open() -> Result<Connection> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("CREATE TABLE t (name TEXT, age INTEGER);")?;
        Ok(conn)
    }

    #[test]
    fn null_binds_as_sql_null() -> Result<()> {
        let conn = open()?;

        conn.execute(
            "INSERT INTO t (name, age) VALUES (?1, ?2)",
            params![NullString::null(), Null::new(30i64)],
        )?;

        let (name_is_null, age): (bool, i64) =
            conn.query_row("SELECT name IS NULL, age FROM t", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;

        assert!(name_is_null);
        assert_eq!(age, 30);
        Ok(())
    }

    #[test]
    fn reads_sql_null_as_invalid() -> Result<()> {
        let conn = open()?;
        conn.execute("INSERT INTO t (name, age) VALUES ('abc', NULL)", [])?;

        let (name, age): (NullString, NullInt64) =
            conn.query_row("SELECT name, age FROM t", [], |row| {
                Ok((row.get_null(0)?, row.get_null("age")?))
            })?;

        assert_eq!(name, Null::new("abc".to_string()));
        assert!(!age.valid);
        Ok(())
    }

    #[test]
    fn get_or_default_substitutes_zero() -> Result<()> {
        let conn = open()?;
        conn.execute("INSERT INTO t (name, age) VALUES (NULL, NULL)", [])?;

        let (name, age): (String, i64) = conn.query_row("SELECT name, age FROM t", [], |row| {
            Ok((row.get_or_default(0)?, row.get_or_default(1)?))
        })?;

        assert_eq!(name, "");
        assert_eq!(age, 0);
        Ok(())
    }

    #[test]
    fn type_errors_still_surface() -> Result<()> {
        let conn = open()?;
        conn.execute("INSERT INTO t (name, age) VALUES ('abc', 1)", [])?;

        let res: Result<NullInt64> = conn.query_row("SELECT name FROM t", [], |row| row.get_null(0));

        assert!(matches!(res, Err(rusqlite::Error::InvalidColumnType(..))));
        Ok(())
    }
}
