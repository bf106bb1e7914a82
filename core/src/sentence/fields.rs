use std::str::FromStr;

use crate::prelude::{ConvertError, ConvertResult};

/// Character offset of the sentence type inside a raw line: `$` plus the
/// two-letter talker.
const TYPE_OFFSET: usize = 3;

/// Comma-separated fields of one sentence, borrowed from the raw line.
///
/// Field 0 is the three-letter sentence type. Empty fields are kept so that
/// positions stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceFields<'a> {
    fields: Vec<&'a str>,
}

impl<'a> SentenceFields<'a> {
    /// Extracts the fields between the talker prefix and the first `*`.
    ///
    /// The prefix is skipped by characters, not bytes, so a non-ASCII talker
    /// shifts the type code rather than failing. The checksum after `*` is
    /// not inspected.
    pub fn extract(sentence: &'a str) -> ConvertResult<Self> {
        if sentence.chars().count() < TYPE_OFFSET {
            return Err(ConvertError::Framing(format!(
                "sentence shorter than {} characters: {:?}",
                TYPE_OFFSET, sentence
            )));
        }
        let start = sentence
            .char_indices()
            .nth(TYPE_OFFSET)
            .map_or(sentence.len(), |(offset, _)| offset);

        let star = sentence.find('*').ok_or_else(|| {
            ConvertError::Framing(format!("no '*' checksum delimiter in {:?}", sentence))
        })?;
        if star < start {
            return Err(ConvertError::Framing(format!(
                "'*' delimiter precedes the sentence type in {:?}",
                sentence
            )));
        }

        Ok(Self {
            fields: sentence[start..star].trim().split(',').collect(),
        })
    }

    /// The sentence type code, e.g. `TTM`.
    pub fn kind(&self) -> &'a str {
        self.fields[0]
    }

    /// Field count, type code included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn text(&self, index: usize, name: &'static str) -> ConvertResult<&'a str> {
        self.fields
            .get(index)
            .copied()
            .ok_or_else(|| ConvertError::MissingField {
                sentence: self.kind().to_string(),
                name,
                index,
            })
    }

    pub fn real(&self, index: usize, name: &'static str) -> ConvertResult<f64> {
        self.number(index, name)
    }

    pub fn integer(&self, index: usize, name: &'static str) -> ConvertResult<i32> {
        self.number(index, name)
    }

    fn number<T: FromStr>(&self, index: usize, name: &'static str) -> ConvertResult<T> {
        let raw = self.text(index, name)?;
        raw.trim().parse().map_err(|_| ConvertError::InvalidField {
            sentence: self.kind().to_string(),
            name,
            value: raw.to_string(),
        })
    }
}
