#![allow(dead_code)]

use fwc_core::Descriptor;
use fwc_core::container::layout::{chunk_size, data_start};

/// Assembles a container image: root, file table, then padded chunks.
pub struct Image {
    root_name: String,
    declared_blocks: Option<u32>,
    files: Vec<(String, Vec<u8>)>,
}

impl Image {
    pub fn new(root_name: &str) -> Self {
        Self {
            root_name: root_name.to_owned(),
            declared_blocks: None,
            files: Vec::new(),
        }
    }

    pub fn file(mut self, name: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.push((name.to_owned(), content.into()));
        self
    }

    /// Override the root block count (defaults to the consistent value).
    pub fn declared_blocks(mut self, blocks: u32) -> Self {
        self.declared_blocks = Some(blocks);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let count = self.files.len() as u32;
        let mut body = Vec::new();
        for (name, content) in &self.files {
            body.extend(Descriptor::new(name, 0, content.len() as u32).to_bytes());
        }

        let start = data_start(count) as usize;
        let mut data = Vec::new();
        for (_, content) in &self.files {
            let at = data.len();
            data.extend_from_slice(content);
            data.resize(at + chunk_size(content.len() as u32) as usize, 0);
        }

        let blocks = self
            .declared_blocks
            .unwrap_or(((start + data.len()) / 512) as u32);
        let mut out = Descriptor::new(&self.root_name, count, blocks).to_bytes().to_vec();
        out.extend(body);
        // With a multiple of four entries the last descriptor sits past `start`
        assert!(out.len() <= start, "descriptor table overlaps the data region");
        out.resize(start, 0);
        out.extend(data);
        out
    }
}
