use csv_async::StringRecord;

use crate::error::ImportError;

/// Column names every upload must carry. Matching is case-sensitive and
/// order-independent; extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = ["uid", "name", "email", "phone", "role"];

/// Name-to-position map resolved from the header row, once per file.
///
/// Rows are addressed through this map rather than by position, so the
/// source file may order its columns however it likes.
#[derive(Debug, Clone)]
pub struct Columns {
    uid: usize,
    name: usize,
    email: usize,
    phone: usize,
    role: usize,
}

impl Columns {
    /// Resolve every required column against the header, failing on the
    /// first missing name.
    pub fn from_header(header: &StringRecord) -> Result<Self, ImportError> {
        let position = |wanted: &str| {
            header
                .iter()
                .position(|h| h == wanted)
                .ok_or_else(|| ImportError::MissingColumn(wanted.to_string()))
        };
        let [uid, name, email, phone, role] = REQUIRED_COLUMNS;
        Ok(Self {
            uid: position(uid)?,
            name: position(name)?,
            email: position(email)?,
            phone: position(phone)?,
            role: position(role)?,
        })
    }

    pub fn uid(&self) -> usize {
        self.uid
    }

    pub fn name(&self) -> usize {
        self.name
    }

    pub fn email(&self) -> usize {
        self.email
    }

    pub fn phone(&self) -> usize {
        self.phone
    }

    pub fn role(&self) -> usize {
        self.role
    }
}
