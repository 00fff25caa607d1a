use std::io::Write;

use mongodb::bson::{Bson, Document};
use serde::Serialize;

use crate::error::Result;

/// Human-readable console output: a header per section followed by its results.
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Report { out }
    }

    pub fn section(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "\n== {} ==", title)?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn document(&mut self, document: Document) -> Result<()> {
        let value = Bson::Document(document).into_relaxed_extjson();
        writeln!(self.out, "{}", serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }

    pub fn documents(&mut self, documents: Vec<Document>) -> Result<()> {
        if documents.is_empty() {
            return self.line("(no documents)");
        }
        for document in documents {
            self.document(document)?;
        }
        Ok(())
    }

    pub fn value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        writeln!(self.out, "{}", serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
