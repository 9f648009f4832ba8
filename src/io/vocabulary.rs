use std::io::BufRead;
use std::path::Path;

use arcstr::ArcStr;
use hashbrown::HashSet;
use log::info;

use crate::data_structs::enums::AnnotationType;
use crate::error::Result;
use crate::io::compression::open_input;

/// Reference list of known identifiers for one annotation type.
///
/// Vocabulary files hold one identifier per line; blank lines are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationVocabulary {
    annotation_type: AnnotationType,
    ids:             HashSet<ArcStr>,
}

impl AnnotationVocabulary {
    pub fn from_ids<I, S>(
        annotation_type: AnnotationType,
        ids: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>, {
        Self {
            annotation_type,
            ids: ids
                .into_iter()
                .map(|s| ArcStr::from(s.as_ref().trim()))
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn from_reader<R: BufRead>(
        annotation_type: AnnotationType,
        reader: R,
    ) -> Result<Self> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::from_ids(annotation_type, lines))
    }

    pub fn from_path<P: AsRef<Path>>(
        annotation_type: AnnotationType,
        path: P,
    ) -> Result<Self> {
        let vocabulary = Self::from_reader(annotation_type, open_input(path.as_ref())?)?;
        info!(
            "Loaded {} {} identifiers from {}",
            vocabulary.len(),
            annotation_type,
            path.as_ref().display()
        );
        Ok(vocabulary)
    }

    /// Loads `<dir>/<TYPE>_IDS.txt`, e.g. `KO_IDS.txt`.
    pub fn from_dir<P: AsRef<Path>>(
        dir: P,
        annotation_type: AnnotationType,
    ) -> Result<Self> {
        Self::from_path(
            annotation_type,
            dir.as_ref()
                .join(annotation_type.vocabulary_file_name()),
        )
    }

    pub fn annotation_type(&self) -> AnnotationType { self.annotation_type }

    pub fn contains(
        &self,
        id: &str,
    ) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize { self.ids.len() }

    pub fn is_empty(&self) -> bool { self.ids.is_empty() }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::error::AnnotError;

    #[test]
    fn test_from_reader() {
        let data = "K00001\nK00002\n\n  K00003  \n";
        let vocabulary =
            AnnotationVocabulary::from_reader(AnnotationType::KO, data.as_bytes())
                .unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("K00003"));
        assert!(!vocabulary.contains(""));
        assert!(!vocabulary.contains("K99999"));
    }

    #[test]
    fn test_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("PFAM_IDS.txt"), "PF00001.21\nPF00002.24\n")
            .unwrap();
        let vocabulary =
            AnnotationVocabulary::from_dir(dir.path(), AnnotationType::PFAM).unwrap();
        assert_eq!(vocabulary.annotation_type(), AnnotationType::PFAM);
        assert!(vocabulary.contains("PF00002.24"));

        let missing = AnnotationVocabulary::from_dir(dir.path(), AnnotationType::KO);
        assert!(matches!(missing, Err(AnnotError::Io(_))));
    }
}
