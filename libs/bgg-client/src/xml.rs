//! Decoding of BGG XML API2 payloads
//!
//! Every endpoint answers with an `<items>` document whose `<item>` children
//! carry the payload in attributes and single-purpose child elements. Error
//! responses use an `<errors>` root with `<error><message>` entries instead,
//! even when the HTTP status is 200.

use crate::error::{Error, Result};
use crate::models::{Link, SearchItem, SearchResults, Thing, ThingName};
use roxmltree::{Document, Node};

/// Decode a search response (`/search?query=...`).
pub fn parse_search(xml: &str) -> Result<SearchResults> {
    let doc = Document::parse(xml)?;
    let root = root_items(&doc)?;

    let total = root
        .attribute("total")
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);

    let mut items = Vec::new();
    for node in root.children().filter(|node| node.has_tag_name("item")) {
        items.push(parse_search_item(&node)?);
    }

    Ok(SearchResults { total, items })
}

/// Decode a thing response (`/thing?id=...`).
pub fn parse_things(xml: &str) -> Result<Vec<Thing>> {
    let doc = Document::parse(xml)?;
    let root = root_items(&doc)?;

    let mut things = Vec::new();
    for node in root.children().filter(|node| node.has_tag_name("item")) {
        things.push(parse_thing(&node)?);
    }

    Ok(things)
}

fn root_items<'a>(doc: &'a Document) -> Result<Node<'a, 'a>> {
    let root = doc.root_element();
    match root.tag_name().name() {
        "items" => Ok(root),
        "errors" => Err(Error::Api(error_message(&root))),
        other => Err(Error::Decode(format!("unexpected root element <{other}>"))),
    }
}

fn error_message(root: &Node) -> String {
    root.descendants()
        .find(|node| node.has_tag_name("message"))
        .and_then(|node| node.text())
        .map(|text| text.trim().to_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

fn parse_search_item(node: &Node) -> Result<SearchItem> {
    let id = required_id(node)?;

    let name = node
        .children()
        .find(|child| child.has_tag_name("name"))
        .and_then(|child| child.attribute("value"))
        .map(String::from)
        .ok_or_else(|| Error::Decode(format!("search item {id} has no name")))?;

    Ok(SearchItem {
        id,
        kind: node.attribute("type").unwrap_or_default().to_string(),
        name,
        year_published: child_number(node, "yearpublished"),
    })
}

fn parse_thing(node: &Node) -> Result<Thing> {
    let id = required_id(node)?;

    let mut names = Vec::new();
    let mut links = Vec::new();
    for child in node.children().filter(|child| child.is_element()) {
        match child.tag_name().name() {
            "name" => {
                if let Some(value) = child.attribute("value") {
                    names.push(ThingName {
                        kind: child.attribute("type").unwrap_or("alternate").to_string(),
                        value: value.to_string(),
                    });
                }
            }
            "link" => {
                let link_id = child.attribute("id").and_then(|value| value.parse().ok());
                if let (Some(link_id), Some(value)) = (link_id, child.attribute("value")) {
                    links.push(Link {
                        kind: child.attribute("type").unwrap_or_default().to_string(),
                        id: link_id,
                        value: value.to_string(),
                    });
                }
            }
            _ => {}
        }
    }

    Ok(Thing {
        id,
        kind: node.attribute("type").unwrap_or_default().to_string(),
        thumbnail: child_text(node, "thumbnail"),
        image: child_text(node, "image"),
        names,
        description: child_text(node, "description"),
        year_published: child_number(node, "yearpublished"),
        min_players: child_number(node, "minplayers"),
        max_players: child_number(node, "maxplayers"),
        playing_time: child_number(node, "playingtime"),
        min_play_time: child_number(node, "minplaytime"),
        max_play_time: child_number(node, "maxplaytime"),
        min_age: child_number(node, "minage"),
        links,
    })
}

fn required_id(node: &Node) -> Result<u64> {
    node.attribute("id")
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| Error::Decode("<item> is missing a numeric id attribute".to_string()))
}

/// Numeric content carried as `<name value="..."/>` on the first matching child.
fn child_number<T: std::str::FromStr>(node: &Node, name: &str) -> Option<T> {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.attribute("value"))
        .and_then(|value| value.parse().ok())
}

fn child_text(node: &Node, name: &str) -> Option<String> {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
        .map(str::to_string)
        .filter(|text| !text.is_empty())
}
