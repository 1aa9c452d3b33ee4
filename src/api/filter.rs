//! Named field allow-lists applied to `responseData` at serialization time.
//!
//! Each endpoint exposes its own projection of the domain object. A filter
//! keeps only the listed keys of the payload object (or of every object in a
//! payload array); keys it lists that the object does not have are simply
//! absent from the output.

use serde_json::{Map, Value};

/// A named allow-list of JSON field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFilter {
    name: &'static str,
    fields: &'static [&'static str],
}

/// Roles listing.
pub const USER_ROLE_FILTER: FieldFilter =
    FieldFilter::new("UserRoleFilter", &["id", "name", "description"]);

/// Users listing. Ids are not exposed here.
pub const USER_LIST_FILTER: FieldFilter = FieldFilter::new(
    "UserListFilter",
    &[
        "firstName",
        "lastName",
        "email",
        "type",
        "lastModified",
        "dob",
        "gender",
        "isDeleted",
    ],
);

/// Single user lookup and creation.
pub const USER_DETAIL_FILTER: FieldFilter = FieldFilter::new(
    "UserDetailFilter",
    &[
        "id",
        "firstName",
        "lastName",
        "email",
        "type",
        "lastModified",
        "dob",
        "gender",
        "isDeleted",
    ],
);

/// User update.
pub const USER_UPDATE_FILTER: FieldFilter = FieldFilter::new(
    "UserUpdateFilter",
    &[
        "firstName",
        "lastName",
        "email",
        "type",
        "lastModified",
        "dob",
        "gender",
        "isDeleted",
    ],
);

impl FieldFilter {
    pub const fn new(name: &'static str, fields: &'static [&'static str]) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    pub fn allows(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    /// Filters a payload in place.
    ///
    /// Objects and arrays of objects are restricted to the allow-list;
    /// anything else (including `""` and `null`) is left as is.
    pub fn apply(&self, payload: &mut Value) {
        match payload {
            Value::Object(map) => self.retain(map),
            Value::Array(items) => {
                for item in items {
                    if let Value::Object(map) = item {
                        self.retain(map);
                    }
                }
            }
            _ => {}
        }
    }

    fn retain(&self, map: &mut Map<String, Value>) {
        map.retain(|key, _| self.allows(key));
    }
}
