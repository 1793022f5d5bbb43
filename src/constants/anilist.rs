pub static GRAPHQL_ENDPOINT: &str = "https://graphql.anilist.co/";

pub static DEFAULT_USERNAME: &str = "theonlylevelupper28";

pub static DEFAULT_USER_AGENT: &str = "sitefeed worker (https://xetera.dev)";

/// Planning / dropped / repeating / paused entries never show up on the
/// site, so they're filtered server-side.
pub static READING_LIST_QUERY: &str = r#"
query UserQuery($userName: String) {
  mangaList: MediaListCollection(userName: $userName, type: MANGA, status_not_in: [PLANNING, DROPPED, REPEATING, PAUSED]) {
    lists {
      name
      entries {
        updatedAt
        progress
        media {
          id
          description
          startDate {
            year
          }
          coverImage {
            large
          }
          title {
            english
          }
        }
      }
    }
  }
}
"#;
