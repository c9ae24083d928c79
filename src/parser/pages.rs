use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::info;

use crate::error::CatalogError;
use crate::page::Page;

/// Read a page file and return its records.
pub fn load(path: &Path) -> Result<Vec<Page>, CatalogError> {
    let xml = fs::read_to_string(path).map_err(|source| CatalogError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let pages = extract(&xml)?;
    info!("Loaded {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

/// Single event-based pass over the document: a <Page> start opens a
/// record, child element text fills its fields, </Page> closes it.
/// Elements outside a <Page> are ignored.
pub fn extract(xml: &str) -> Result<Vec<Page>, CatalogError> {
    let mut reader = Reader::from_str(xml);
    let mut pages = Vec::new();
    let mut current: Option<Page> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"Page" {
                    let mut page = Page::default();
                    for attr in e.attributes() {
                        let attr =
                            attr.map_err(|err| CatalogError::MalformedRecord(err.to_string()))?;
                        let value = attr
                            .unescape_value()
                            .map_err(|err| CatalogError::MalformedRecord(err.to_string()))?;
                        match attr.key.as_ref() {
                            b"id" => page.id = value.into_owned(),
                            b"authorize" => page.authorize = parse_bool(&value),
                            _ => {}
                        }
                    }
                    current = Some(page);
                }
                text.clear();
            }
            Ok(Event::Text(e)) => {
                let value = e
                    .unescape()
                    .map_err(|err| CatalogError::MalformedRecord(err.to_string()))?;
                text = value.trim().to_string();
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"Page" {
                    if let Some(page) = current.take() {
                        pages.push(page);
                    }
                } else if let Some(page) = current.as_mut() {
                    match e.name().as_ref() {
                        b"Title" => page.title = std::mem::take(&mut text),
                        b"Type" => page.kind = std::mem::take(&mut text),
                        b"Email" => page.email = std::mem::take(&mut text),
                        b"HasNews" => page.has_news = parse_bool(&text),
                        b"HasArchive" => page.has_archive = parse_bool(&text),
                        b"Voting" => page.voting = std::mem::take(&mut text),
                        b"Paid" => page.paid = parse_bool(&text),
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(CatalogError::MalformedRecord(e.to_string())),
            _ => {}
        }
    }
    Ok(pages)
}

fn parse_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("true")
}

// ── Tests ──
