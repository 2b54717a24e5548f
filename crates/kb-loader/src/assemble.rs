//! Pairing enumerated files with their loaded documents.

use crate::error::{KbError, Result};
use crate::types::{Document, FeatureCatalog, KnowledgeBase, RecommendationFile};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

impl KnowledgeBase {
    /// Zip `files` with `documents` by position into a knowledge base.
    ///
    /// `documents[i]` must be the parsed contents of `files[i]`; this is what
    /// [`crate::load_recommendations`] guarantees when given the same slice.
    /// Two files yielding the same identifier (possible with lossily
    /// converted non UTF-8 names) are an error, never an overwrite.
    pub fn assemble(
        files: &[RecommendationFile],
        documents: Vec<Document>,
        features: FeatureCatalog,
    ) -> Result<Self> {
        if files.len() != documents.len() {
            return Err(KbError::LengthMismatch {
                expected: files.len(),
                found: documents.len(),
            });
        }

        let mut recommendations = BTreeMap::new();
        for (index, (file, document)) in files.iter().zip(documents).enumerate() {
            match recommendations.entry(file.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(document);
                }
                Entry::Occupied(_) => {
                    let first = files[..index]
                        .iter()
                        .find(|earlier| earlier.id == file.id)
                        .map(|earlier| earlier.path.clone())
                        .unwrap_or_default();
                    return Err(KbError::DuplicateId {
                        id: file.id.clone(),
                        first,
                        second: file.path.clone(),
                    });
                }
            }
        }

        Ok(Self {
            recommendations,
            features,
        })
    }

    pub fn recommendation_count(&self) -> usize {
        self.recommendations.len()
    }
}
