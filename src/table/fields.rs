use crate::error::{GhReposError, Result};
use crate::github::types::Record;
use std::fmt;

pub const PUBLIC_SYMBOL: &str = "✔";
pub const PRIVATE_SYMBOL: &str = "✖";
const NONE_PLACEHOLDER: &str = "---";

/// A displayable column: its header name and how to pull its value from a record.
pub struct FieldSpec {
    pub name: &'static str,
    extract: fn(&Record) -> String,
}

impl FieldSpec {
    pub fn extract(&self, record: &Record) -> String {
        (self.extract)(record)
    }
}

impl PartialEq for FieldSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FieldSpec {}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldSpec").field(&self.name).finish()
    }
}

pub static FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "Repository",
        extract: repository,
    },
    FieldSpec {
        name: "Owner",
        extract: owner,
    },
    FieldSpec {
        name: "Access",
        extract: access,
    },
    FieldSpec {
        name: "DefBranch",
        extract: default_branch,
    },
    FieldSpec {
        name: "isPublic",
        extract: visibility,
    },
];

fn repository(r: &Record) -> String {
    r.name.clone()
}

fn owner(r: &Record) -> String {
    r.owner.clone()
}

fn access(r: &Record) -> String {
    r.permission
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| NONE_PLACEHOLDER.to_string())
}

fn default_branch(r: &Record) -> String {
    r.default_branch
        .clone()
        .unwrap_or_else(|| NONE_PLACEHOLDER.to_string())
}

fn visibility(r: &Record) -> String {
    let symbol = if r.is_private { PRIVATE_SYMBOL } else { PUBLIC_SYMBOL };
    symbol.to_string()
}

pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|f| f.name)
}

/// Case-insensitive position of `name` among the known fields.
pub fn field_index(name: &str) -> Result<usize> {
    FIELDS
        .iter()
        .position(|f| f.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| GhReposError::InvalidField(name.to_string()))
}

pub fn lookup(name: &str) -> Result<&'static FieldSpec> {
    field_index(name).map(|i| &FIELDS[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::ViewerPermission;
    use crate::test_utils::make_record;

    #[test]
    fn lookup_ignores_case() {
        for name in FIELDS.iter().map(|f| f.name) {
            let lower = field_index(&name.to_lowercase()).unwrap();
            let upper = field_index(&name.to_uppercase()).unwrap();
            let exact = field_index(name).unwrap();
            assert_eq!(lower, exact);
            assert_eq!(upper, exact);
        }
        assert_eq!(field_index("repository").unwrap(), 0);
        assert_eq!(field_index("REPOSITORY").unwrap(), 0);
        assert_eq!(field_index("Repository").unwrap(), 0);
        assert_eq!(lookup("ispublic").unwrap().name, "isPublic");
    }

    #[test]
    fn unknown_field_is_rejected() {
        for bad in ["", "stars", "repo", "Repository "] {
            match lookup(bad) {
                Err(GhReposError::InvalidField(name)) => assert_eq!(name, bad),
                other => panic!("expected InvalidField for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn names_in_display_order() {
        let names: Vec<_> = field_names().collect();
        assert_eq!(names, ["Repository", "Owner", "Access", "DefBranch", "isPublic"]);
    }

    #[test]
    fn extractors_render_display_values() {
        let mut record = make_record("arachne", "walter");
        record.permission = Some(ViewerPermission::Write);
        let values: Vec<_> = FIELDS.iter().map(|f| f.extract(&record)).collect();
        assert_eq!(values, ["arachne", "walter", "WRITE", "main", PUBLIC_SYMBOL]);

        record.default_branch = None;
        record.permission = None;
        record.is_private = true;
        assert_eq!(FIELDS[2].extract(&record), "---");
        assert_eq!(FIELDS[3].extract(&record), "---");
        assert_eq!(FIELDS[4].extract(&record), PRIVATE_SYMBOL);
    }
}
