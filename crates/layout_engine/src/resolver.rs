//! Page size resolution
//!
//! Every `PAGE` node in a tree gets a `box` computed from its `size` and
//! `orientation` props. Pages are resolved independently of each other and
//! of their ancestors; all other nodes are left untouched.
//!
//! Resolution is all-or-nothing: boxes are computed for every page first and
//! only written once all of them succeeded, so a failed call never leaves a
//! half-resolved tree behind.

use crate::{
    LayoutError, Orientation, PaperSize, ResolverSettings, Result, SizeSpec, UnknownSizePolicy,
    ORIENTATION_PROP, SIZE_PROP,
};
use doc_model::{DocumentNode, NodePath, PageBox};

/// Resolves page boxes according to a set of `ResolverSettings`
#[derive(Debug, Clone)]
pub struct PageSizeResolver {
    settings: ResolverSettings,
    default_box: PageBox,
}

impl PageSizeResolver {
    /// Create a resolver with default settings (A4, unknown names are errors)
    pub fn new() -> Self {
        let settings = ResolverSettings::default();
        let (width, height) = PaperSize::default().dimensions();
        Self {
            settings,
            default_box: PageBox::sized(width, height),
        }
    }

    /// Create a resolver with custom settings, validating them first
    pub fn with_settings(settings: ResolverSettings) -> Result<Self> {
        let (width, height) = settings.default_paper_size()?.dimensions();
        Ok(Self {
            settings,
            default_box: PageBox::sized(width, height),
        })
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolve every page of `tree` and return the resolved tree
    pub fn resolve(&self, mut tree: DocumentNode) -> Result<DocumentNode> {
        self.resolve_in_place(&mut tree)?;
        Ok(tree)
    }

    /// Resolve every page of `tree` in place, returning the number of pages.
    ///
    /// On error the tree is left exactly as it was.
    pub fn resolve_in_place(&self, tree: &mut DocumentNode) -> Result<usize> {
        let _span = tracing::debug_span!("resolve_page_sizes").entered();

        let boxes = tree
            .pages()
            .map(|(path, page)| self.page_box(page, &path).map(|page_box| (path, page_box)))
            .collect::<Result<Vec<_>>>()?;

        for (path, page_box) in &boxes {
            tree.node_at_mut(path)?.page_box = Some(*page_box);
        }

        tracing::debug!(pages = boxes.len(), "resolved page sizes");
        Ok(boxes.len())
    }

    /// Compute the box for a single page node located at `path`
    pub fn page_box(&self, page: &DocumentNode, path: &NodePath) -> Result<PageBox> {
        let spec = page
            .prop(SIZE_PROP)
            .and_then(SizeSpec::from_value)
            .unwrap_or_else(|| SizeSpec::Named(self.settings.default_size.clone()));
        let orientation = Orientation::from_value(page.prop(ORIENTATION_PROP));

        let base = match spec.base_box() {
            Some(base) => base,
            None => self.unknown_size(&spec, path)?,
        };
        let page_box = orientation.apply(base);

        tracing::trace!(
            %path,
            ?spec,
            orientation = orientation.as_str(),
            width = ?page_box.width,
            height = ?page_box.height,
            "resolved page"
        );
        Ok(page_box)
    }

    fn unknown_size(&self, spec: &SizeSpec, path: &NodePath) -> Result<PageBox> {
        let name = match spec {
            SizeSpec::Named(name) => name.clone(),
            other => format!("{:?}", other),
        };
        match self.settings.unknown_size {
            UnknownSizePolicy::Error => Err(LayoutError::UnknownSizeName {
                name,
                path: path.clone(),
            }),
            UnknownSizePolicy::Default => {
                tracing::warn!(
                    %path,
                    size = %name,
                    fallback = %self.settings.default_size,
                    "unknown page size, using default"
                );
                Ok(self.default_box)
            }
        }
    }
}

impl Default for PageSizeResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve every page of `tree` with default settings
pub fn resolve_page_sizes(tree: DocumentNode) -> Result<DocumentNode> {
    PageSizeResolver::new().resolve(tree)
}
