use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// The `data` field of the reading list query. Field names round-trip
/// through camelCase so the records the pipeline ingests look exactly like
/// the wire payload.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingData {
    pub manga_list: MediaListCollection,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MediaListCollection {
    pub lists: Vec<MediaListGroup>,
}

/// One named list ("Reading", "Completed", ...) and its entries. Entries
/// arrive already bucketed by list; they're never re-grouped on this side.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MediaListGroup {
    pub name: String,
    pub entries: Vec<MediaListEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaListEntry {
    /// Unix timestamp of the last progress update.
    pub updated_at: i64,
    /// Chapters read so far.
    pub progress: u32,
    pub media: Media,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    pub description: Option<String>,
    pub start_date: StartDate,
    pub cover_image: CoverImage,
    pub title: MediaTitle,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StartDate {
    pub year: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CoverImage {
    pub large: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MediaTitle {
    pub english: Option<String>,
}

impl MediaListCollection {
    pub fn total_entries(&self) -> usize {
        self.lists.iter().map(|list| list.entries.len()).sum()
    }

    /// Most recent `updatedAt` across every list, if any entries exist.
    pub fn last_updated(&self) -> Option<i64> {
        self.lists
            .iter()
            .flat_map(|list| &list.entries)
            .map(|entry| entry.updated_at)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> &'static str {
        r#"{
            "mangaList": {
                "lists": [
                    {
                        "name": "Reading",
                        "entries": [
                            {
                                "updatedAt": 1700000500,
                                "progress": 42,
                                "media": {
                                    "id": 30002,
                                    "description": "A boy meets a witch.",
                                    "startDate": { "year": 2003 },
                                    "coverImage": { "large": "https://img.test/30002.jpg" },
                                    "title": { "english": "Berserk" }
                                }
                            },
                            {
                                "updatedAt": 1700000100,
                                "progress": 0,
                                "media": {
                                    "id": 105778,
                                    "description": null,
                                    "startDate": { "year": null },
                                    "coverImage": { "large": null },
                                    "title": { "english": null }
                                }
                            }
                        ]
                    },
                    {
                        "name": "Completed",
                        "entries": [
                            {
                                "updatedAt": 1600000000,
                                "progress": 162,
                                "media": {
                                    "id": 30013,
                                    "description": "Pirates.",
                                    "startDate": { "year": 1997 },
                                    "coverImage": { "large": "https://img.test/30013.jpg" },
                                    "title": { "english": "One Piece" }
                                }
                            }
                        ]
                    }
                ]
            }
        }"#
    }

    #[test]
    fn parses_lists_bucketed_by_name() {
        let data: ReadingData = serde_json::from_str(fixture()).unwrap();
        let lists = &data.manga_list.lists;

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].name, "Reading");
        assert_eq!(lists[0].entries.len(), 2);
        assert_eq!(lists[1].name, "Completed");
        assert_eq!(lists[1].entries.len(), 1);
        assert_eq!(data.manga_list.total_entries(), 3);
    }

    #[test]
    fn entry_fields_survive_parsing() {
        let data: ReadingData = serde_json::from_str(fixture()).unwrap();
        let entry = &data.manga_list.lists[0].entries[0];

        assert_eq!(entry.progress, 42);
        assert_eq!(entry.updated_at, 1700000500);
        assert_eq!(entry.media.id, 30002);
        assert_eq!(entry.media.start_date.year, Some(2003));
        assert_eq!(entry.media.title.english.as_deref(), Some("Berserk"));
    }

    #[test]
    fn last_updated_is_max_across_lists() {
        let data: ReadingData = serde_json::from_str(fixture()).unwrap();
        assert_eq!(data.manga_list.last_updated(), Some(1700000500));
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let data: ReadingData = serde_json::from_str(fixture()).unwrap();
        let value = serde_json::to_value(&data).unwrap();

        assert!(value.get("mangaList").is_some());
        let entry = &value["mangaList"]["lists"][0]["entries"][0];
        assert!(entry.get("updatedAt").is_some());
        assert!(entry["media"].get("startDate").is_some());
        assert!(entry["media"].get("coverImage").is_some());
    }

    #[test]
    fn negative_progress_is_rejected() {
        let broken = r#"{
            "mangaList": {
                "lists": [
                    {
                        "name": "Reading",
                        "entries": [
                            {
                                "updatedAt": 0,
                                "progress": -3,
                                "media": {
                                    "id": 1,
                                    "description": null,
                                    "startDate": { "year": null },
                                    "coverImage": { "large": null },
                                    "title": { "english": null }
                                }
                            }
                        ]
                    }
                ]
            }
        }"#;

        assert!(serde_json::from_str::<ReadingData>(broken).is_err());
    }
}
