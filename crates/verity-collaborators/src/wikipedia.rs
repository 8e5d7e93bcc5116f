//! Person lookup through MediaWiki search and Wikidata entity data.
//!
//! Search picks the best page, the page's introduction and `wikibase_item`
//! are fetched next, and Wikidata property `P570` (date of death) decides
//! alive or dead. When Wikidata is unreachable the introduction text is
//! scanned for a death date instead.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use verity_core::config::KnowledgeLookupConfig;
use verity_core::errors::CollaboratorError;
use verity_core::models::PersonRecord;
use verity_core::traits::KnowledgeLookup;
use verity_knowledge::dates::month_number;

use crate::http;

const NAME: &str = "wikipedia";

/// Wikidata property for date of death.
const DATE_OF_DEATH: &str = "P570";

macro_rules! extract_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

extract_pattern!(
    RE_ES_DEATH,
    r"(?i)(?:falleci[óo]|muri[óo])\s+el\s+(\d{1,2})\s+de\s+(\w+)\s+de\s+(\d{4})"
);
extract_pattern!(
    RE_EN_DEATH,
    r"(?i)died\s+on\s+(\w+)\s+(\d{1,2}),?\s+(\d{4})"
);
extract_pattern!(RE_YEAR_RANGE, r"\(\D*\d{4}\s*[-–]\s*\D*\d{4}\)");

// ── Wire types ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    pageid: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    query: PageQuery,
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    extract: String,
    #[serde(default)]
    fullurl: String,
    #[serde(default)]
    pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    wikibase_item: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EntityResponse {
    entities: HashMap<String, Entity>,
}

#[derive(Debug, Deserialize)]
struct Entity {
    #[serde(default)]
    claims: HashMap<String, Vec<Statement>>,
}

#[derive(Debug, Deserialize)]
struct Statement {
    mainsnak: Snak,
}

#[derive(Debug, Deserialize)]
struct Snak {
    datavalue: Option<DataValue>,
}

#[derive(Debug, Deserialize)]
struct DataValue {
    value: serde_json::Value,
}

/// What a source says about whether a person is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vital {
    Alive,
    Dead(Option<NaiveDate>),
}

// ── Adapter ────────────────────────────────────────────────────────────────

/// [`KnowledgeLookup`] backed by Wikipedia and Wikidata.
#[derive(Debug, Clone)]
pub struct WikipediaLookup {
    client: Client,
    api_url: String,
    entity_url: String,
    timeout: Duration,
}

impl WikipediaLookup {
    pub fn from_config(config: &KnowledgeLookupConfig) -> Result<Self, CollaboratorError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        Ok(Self {
            client: http::build_client(NAME, &config.user_agent, timeout)?,
            api_url: config.wikipedia_api_url.clone(),
            entity_url: config.wikidata_entity_url.clone(),
            timeout,
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, CollaboratorError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| http::send_error(NAME, self.timeout, e))?;
        http::read_json(NAME, self.timeout, response).await
    }

    async fn search(&self, name: &str) -> Result<Option<SearchHit>, CollaboratorError> {
        let response: SearchResponse = self
            .get(
                &self.api_url,
                &[
                    ("action", "query".into()),
                    ("format", "json".into()),
                    ("list", "search".into()),
                    ("srsearch", name.to_string()),
                    ("srlimit", "1".into()),
                    ("utf8", "1".into()),
                ],
            )
            .await?;
        Ok(response.query.and_then(|q| q.search.into_iter().next()))
    }

    async fn page(&self, page_id: u64) -> Result<Page, CollaboratorError> {
        let response: PageResponse = self
            .get(
                &self.api_url,
                &[
                    ("action", "query".into()),
                    ("format", "json".into()),
                    ("pageids", page_id.to_string()),
                    ("prop", "extracts|info|pageprops".into()),
                    ("exintro", "1".into()),
                    ("explaintext", "1".into()),
                    ("inprop", "url".into()),
                ],
            )
            .await?;
        take_page(response, page_id)
    }

    async fn wikidata_vital(&self, qid: &str) -> Result<Vital, CollaboratorError> {
        let url = format!("{}{qid}.json", self.entity_url);
        let response: EntityResponse = self.get(&url, &[]).await?;
        vital_from_entity(&response, qid)
    }
}

#[async_trait]
impl KnowledgeLookup for WikipediaLookup {
    async fn lookup_person(&self, name: &str) -> Result<Option<PersonRecord>, CollaboratorError> {
        let Some(hit) = self.search(name).await? else {
            debug!(name, "no wikipedia results");
            return Ok(None);
        };
        let page = self.page(hit.pageid).await?;

        let qid = page.pageprops.as_ref().and_then(|p| p.wikibase_item.clone());
        let vital = match qid {
            Some(qid) => match self.wikidata_vital(&qid).await {
                Ok(vital) => vital,
                Err(err) => {
                    debug!(%qid, error = %err, "wikidata unavailable, reading page text");
                    vital_from_extract(&page.extract)
                }
            },
            None => vital_from_extract(&page.extract),
        };

        let (is_alive, death_date) = match vital {
            Vital::Alive => (Some(true), None),
            Vital::Dead(date) => (Some(false), date),
        };
        Ok(Some(PersonRecord {
            name: hit.title,
            is_alive,
            death_date,
            source_url: page.fullurl,
        }))
    }

    fn name(&self) -> &str {
        NAME
    }
}

// ── Payload interpretation ─────────────────────────────────────────────────

fn take_page(mut response: PageResponse, page_id: u64) -> Result<Page, CollaboratorError> {
    response
        .query
        .pages
        .remove(&page_id.to_string())
        .ok_or_else(|| CollaboratorError::Malformed {
            collaborator: NAME.to_string(),
            reason: format!("page {page_id} missing from response"),
        })
}

fn vital_from_entity(response: &EntityResponse, qid: &str) -> Result<Vital, CollaboratorError> {
    let entity = response.entities.get(qid).ok_or_else(|| CollaboratorError::Malformed {
        collaborator: NAME.to_string(),
        reason: format!("entity {qid} missing from response"),
    })?;

    let death = entity
        .claims
        .get(DATE_OF_DEATH)
        .and_then(|statements| statements.first())
        .and_then(|s| s.mainsnak.datavalue.as_ref());

    Ok(match death {
        None => Vital::Alive,
        Some(value) => Vital::Dead(
            value
                .value
                .get("time")
                .and_then(|t| t.as_str())
                .and_then(parse_wikidata_time),
        ),
    })
}

/// Wikidata times look like `+2024-02-06T00:00:00Z`. Reduced precision is
/// encoded with zero month or day, which yields `None`.
fn parse_wikidata_time(time: &str) -> Option<NaiveDate> {
    let date = time.trim_start_matches('+').split('T').next()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn vital_from_extract(extract: &str) -> Vital {
    if let Some(c) = RE_ES_DEATH.as_ref().and_then(|re| re.captures(extract)) {
        return Vital::Dead(ymd(&c[3], month_number(&c[2]), &c[1]));
    }
    if let Some(c) = RE_EN_DEATH.as_ref().and_then(|re| re.captures(extract)) {
        return Vital::Dead(ymd(&c[3], month_number(&c[1]), &c[2]));
    }
    if RE_YEAR_RANGE.as_ref().is_some_and(|re| re.is_match(extract)) {
        return Vital::Dead(None);
    }
    Vital::Alive
}

fn ymd(year: &str, month: Option<u32>, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month?, day.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn search_hit_is_first_result() {
        let raw = r#"{"batchcomplete":"","query":{"searchinfo":{"totalhits":2},
            "search":[{"ns":0,"title":"Sebastián Piñera","pageid":123},
                      {"ns":0,"title":"Piñera (apellido)","pageid":456}]}}"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        let hit = parsed.query.and_then(|q| q.search.into_iter().next()).unwrap();
        assert_eq!(hit.pageid, 123);
        assert_eq!(hit.title, "Sebastián Piñera");
    }

    #[test]
    fn empty_search_has_no_hit() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"query":{"search":[]}}"#).unwrap();
        assert!(parsed.query.unwrap().search.is_empty());
    }

    #[test]
    fn page_is_selected_by_id() {
        let raw = r#"{"query":{"pages":{"123":{"pageid":123,"title":"Sebastián Piñera",
            "extract":"Miguel Juan Sebastián Piñera Echenique fue un político chileno.",
            "fullurl":"https://es.wikipedia.org/wiki/Sebasti%C3%A1n_Pi%C3%B1era",
            "pageprops":{"wikibase_item":"Q306"}}}}}"#;
        let parsed: PageResponse = serde_json::from_str(raw).unwrap();
        let page = take_page(parsed, 123).unwrap();
        assert_eq!(page.pageprops.unwrap().wikibase_item.as_deref(), Some("Q306"));
        assert!(page.fullurl.ends_with("Pi%C3%B1era"));
    }

    #[test]
    fn missing_page_is_malformed() {
        let parsed: PageResponse = serde_json::from_str(r#"{"query":{"pages":{}}}"#).unwrap();
        assert!(matches!(take_page(parsed, 9), Err(CollaboratorError::Malformed { .. })));
    }

    #[test]
    fn wikidata_death_claim_gives_date() {
        let raw = r#"{"entities":{"Q306":{"claims":{"P570":[{"mainsnak":{"datavalue":
            {"value":{"time":"+2024-02-06T00:00:00Z","precision":11},"type":"time"}}}]}}}}"#;
        let parsed: EntityResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(vital_from_entity(&parsed, "Q306").unwrap(), Vital::Dead(Some(date(2024, 2, 6))));
    }

    #[test]
    fn wikidata_without_death_claim_is_alive() {
        let raw = r#"{"entities":{"Q615":{"claims":{"P569":[{"mainsnak":{"datavalue":
            {"value":{"time":"+1987-06-24T00:00:00Z"}}}}]}}}}"#;
        let parsed: EntityResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(vital_from_entity(&parsed, "Q615").unwrap(), Vital::Alive);
    }

    #[test]
    fn year_precision_death_has_no_date() {
        assert_eq!(parse_wikidata_time("+1810-00-00T00:00:00Z"), None);
        assert_eq!(parse_wikidata_time("+1999-12-31T00:00:00Z"), Some(date(1999, 12, 31)));
    }

    #[test]
    fn spanish_extract_death_date() {
        let text = "Piñera falleció el 6 de febrero de 2024 en un accidente de helicóptero.";
        assert_eq!(vital_from_extract(text), Vital::Dead(Some(date(2024, 2, 6))));
    }

    #[test]
    fn english_extract_death_date() {
        let text = "He died on February 6, 2024 in Lago Ranco.";
        assert_eq!(vital_from_extract(text), Vital::Dead(Some(date(2024, 2, 6))));
    }

    #[test]
    fn year_range_means_dead_without_date() {
        let text = "Sebastián Piñera (Santiago, 1949 – Lago Ranco, 2024) fue un político.";
        assert_eq!(vital_from_extract(text), Vital::Dead(None));
    }

    #[test]
    fn plain_extract_is_alive() {
        assert_eq!(vital_from_extract("Lionel Messi es un futbolista argentino."), Vital::Alive);
    }
}
