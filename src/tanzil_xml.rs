//! Reader for the Tanzil XML shape shared by the Quran text and its
//! translations: a root holding `<sura index name>` elements, each holding
//! `<aya index text [bismillah]>` elements.
//!
//! The reader only checks structure. Domain meaning (sajdah, periods,
//! words, escaping) is attached by the Quran parser and the translation
//! aligner.

use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::errors::MalformedInputError;

const SURA: &str = "sura";
const AYA: &str = "aya";

/// Parsed document root, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TanzilDocument {
    pub suras: Vec<SuraElement>,
}

/// One `<sura>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuraElement {
    /// Declared `index` attribute
    pub index: u16,
    pub name: String,
    pub ayas: Vec<AyaElement>,
}

/// One `<aya>` element with its attribute values unescaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AyaElement {
    pub index: u16,
    pub text: String,
    pub bismillah: Option<String>,
}

impl TanzilDocument {
    /// Text of the very first verse of the document
    pub fn first_aya_text(&self) -> Option<&str> {
        self.suras
            .first()
            .and_then(|sura| sura.ayas.first())
            .map(|aya| aya.text.as_str())
    }
}

/// Parse cleansed XML text into a [`TanzilDocument`].
///
/// Surah indices must equal their 1-based position in the document and
/// ayah indices their 1-based position inside the surah.
pub fn parse_document(content: &str) -> Result<TanzilDocument, MalformedInputError> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut suras: Vec<SuraElement> = Vec::new();
    let mut current_sura: Option<SuraElement> = None;
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| MalformedInputError::Xml {
                position: reader.buffer_position(),
                message: e.to_string(),
            })?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                match e.name().as_ref() {
                    b"sura" => {
                        if let Some(sura) = current_sura.take() {
                            // A sura opened inside another one
                            return Err(MalformedInputError::Xml {
                                position: reader.buffer_position(),
                                message: format!("<sura> nested inside <sura> {}", sura.index),
                            });
                        }
                        let sura = read_sura(e, suras.len() + 1)?;
                        if is_empty {
                            return Err(MalformedInputError::EmptyElement {
                                element: SURA,
                                child: AYA,
                                position: suras.len() + 1,
                            });
                        }
                        current_sura = Some(sura);
                    }
                    b"aya" => {
                        let sura = current_sura.as_mut().ok_or_else(|| MalformedInputError::Xml {
                            position: reader.buffer_position(),
                            message: "<aya> outside of <sura>".to_string(),
                        })?;
                        let aya = read_aya(e, sura.ayas.len() + 1)?;
                        sura.ayas.push(aya);
                    }
                    _ => {}
                }
            }
            Event::End(ref e) => {
                if e.name().as_ref() == b"sura" {
                    if let Some(sura) = current_sura.take() {
                        if sura.ayas.is_empty() {
                            return Err(MalformedInputError::EmptyElement {
                                element: SURA,
                                child: AYA,
                                position: suras.len() + 1,
                            });
                        }
                        trace!("Read sura {} with {} ayas", sura.index, sura.ayas.len());
                        suras.push(sura);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if current_sura.is_some() {
        return Err(MalformedInputError::Xml {
            position: content.len(),
            message: "unclosed <sura> at end of document".to_string(),
        });
    }

    if suras.is_empty() {
        return Err(MalformedInputError::MissingElement(SURA));
    }

    Ok(TanzilDocument { suras })
}

fn read_sura(e: &BytesStart, position: usize) -> Result<SuraElement, MalformedInputError> {
    let index = read_index(e, SURA, position)?;
    let name = get_attribute(e, SURA, "name", position)?.ok_or(
        MalformedInputError::MissingAttribute {
            element: SURA,
            attribute: "name",
            position,
        },
    )?;

    Ok(SuraElement {
        index,
        name,
        ayas: Vec::new(),
    })
}

fn read_aya(e: &BytesStart, position: usize) -> Result<AyaElement, MalformedInputError> {
    let index = read_index(e, AYA, position)?;
    let text = get_attribute(e, AYA, "text", position)?.ok_or(
        MalformedInputError::MissingAttribute {
            element: AYA,
            attribute: "text",
            position,
        },
    )?;
    let bismillah = get_attribute(e, AYA, "bismillah", position)?;

    Ok(AyaElement {
        index,
        text,
        bismillah,
    })
}

/// Read a positive `index` attribute that matches the element's position
fn read_index(
    e: &BytesStart,
    element: &'static str,
    position: usize,
) -> Result<u16, MalformedInputError> {
    let raw = get_attribute(e, element, "index", position)?.ok_or(
        MalformedInputError::MissingAttribute {
            element,
            attribute: "index",
            position,
        },
    )?;

    let index = raw
        .trim()
        .parse::<u16>()
        .ok()
        .filter(|index| *index > 0)
        .ok_or_else(|| MalformedInputError::InvalidAttribute {
            element,
            attribute: "index",
            position,
            value: raw.clone(),
        })?;

    if usize::from(index) != position {
        return Err(MalformedInputError::OutOfOrder {
            element,
            position,
            declared: index,
        });
    }

    Ok(index)
}

/// Get an unescaped attribute value from a start or empty element
fn get_attribute(
    e: &BytesStart,
    element: &'static str,
    attribute: &'static str,
    position: usize,
) -> Result<Option<String>, MalformedInputError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| MalformedInputError::InvalidAttribute {
            element,
            attribute,
            position,
            value: err.to_string(),
        })?;
        if attr.key.as_ref() == attribute.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|_| MalformedInputError::InvalidAttribute {
                    element,
                    attribute,
                    position,
                    value: String::from_utf8_lossy(&attr.value).into_owned(),
                })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
