use sled::Db as Sled;

use crate::error::StorageError;

/// Text values keyed by string, on top of an embedded sled tree.
#[derive(Clone)]
pub struct Db {
    handle: Sled,
}
impl Db {
    pub fn open(path: &str) -> Result<Self, sled::Error> {
        let handle = sled::open(path)?;
        Ok(Self { handle })
    }
    // backing files are removed on drop
    pub fn temporary() -> Result<Self, sled::Error> {
        let handle = sled::Config::new().temporary(true).open()?;
        Ok(Self { handle })
    }

    pub fn get<K: AsRef<str>>(&self, key: K) -> Result<Option<String>, StorageError> {
        let key = key.as_ref();
        let value = self.handle.get(key).map_err(|source| StorageError::Read {
            key: key.to_string(),
            source,
        })?;
        let value = match value {
            Some(value) => value,
            None => return Ok(None),
        };
        let value = String::from_utf8(value.to_vec()).map_err(|_| StorageError::Encoding {
            key: key.to_string(),
        })?;
        Ok(Some(value))
    }
    pub fn insert<K: AsRef<str>>(&self, key: K, value: &str) -> Result<(), StorageError> {
        let key = key.as_ref();
        self.handle
            .insert(key, value.as_bytes())
            .map_err(|source| StorageError::Write {
                key: key.to_string(),
                source,
            })?;
        Ok(())
    }
    // blocks until everything written so far is on disk
    pub fn flush(&self) -> Result<(), sled::Error> {
        self.handle.flush()?;
        Ok(())
    }
}

// Required Debug implementation for `Db`
impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").finish()
    }
}

// Tests
#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    fn setup() -> Result<(String, Db)> {
        let tick = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_nanos();
        let path = format!("test_db_{}", tick);
        let db = Db::open(&path)?;
        Ok((path, db))
    }
    fn teardown((path, db): (String, Db)) -> Result<()> {
        // kill the db
        drop(db);
        // remove the directory
        std::fs::remove_dir_all(path)?;
        Ok(())
    }

    #[test]
    fn test_open() -> Result<()> {
        let db = setup()?;
        teardown(db)?;
        Ok(())
    }

    #[test]
    fn test_get_missing() -> Result<()> {
        let db = Db::temporary()?;
        assert!(db.get("nothing")?.is_none());
        Ok(())
    }

    #[test]
    fn test_insert_and_get() -> Result<()> {
        let (path, db) = setup()?;
        db.insert("TodoApp", r#"[{"id":1,"title":"a","completed":false}]"#)?;
        let value = db.get("TodoApp")?;
        assert_eq!(
            value.as_deref(),
            Some(r#"[{"id":1,"title":"a","completed":false}]"#)
        );
        teardown((path, db))?;
        Ok(())
    }

    #[test]
    fn test_insert_as_update() -> Result<()> {
        let db = Db::temporary()?;
        db.insert("test", "first")?;
        db.insert("test", "second")?;
        assert_eq!(db.get("test")?.as_deref(), Some("second"));
        Ok(())
    }

    #[test]
    fn test_non_utf8_value() -> Result<()> {
        let db = Db::temporary()?;
        db.handle.insert("raw", &[0xff, 0xfe][..])?;
        assert!(matches!(db.get("raw"), Err(StorageError::Encoding { .. })));
        Ok(())
    }
}
