use crate::config::Affiliation;
use itertools::Itertools;

/// Builds the GraphQL query for one page of the viewer's repositories.
/// The `after` argument is only emitted when a cursor is given.
pub fn build_query(cursor: Option<&str>, page_size: u8, affiliations: &[Affiliation]) -> String {
    let after = cursor
        .map(|c| format!("\n      after: \"{}\"", escape(c)))
        .unwrap_or_default();
    let affiliations = affiliations.iter().join(", ");

    format!(
        r#"query {{
  viewer {{
    repositories(
      first: {page_size}
      affiliations: [{affiliations}]{after}
    ) {{
      totalCount
      pageInfo {{
        endCursor
        hasNextPage
      }}
      nodes {{
        name
        owner {{
          login
        }}
        isPrivate
        defaultBranchRef {{
          name
        }}
        viewerPermission
      }}
    }}
  }}
  rateLimit {{
    cost
    remaining
  }}
}}
"#
    )
}

fn escape(cursor: &str) -> String {
    cursor.replace('\\', "\\\\").replace('"', "\\\"")
}
