use indexmap::IndexMap;

/// A single entry in a [`Structure`]: either an empty placeholder file or a
/// nested directory with its own entries.
#[derive(Debug, Clone)]
pub enum Node {
    File,
    Dir(Structure),
}

/// The nested mapping describing which directories and files to create.
///
/// Keys are paths relative to the owning directory (the base path for the
/// top level). Insertion order is preserved so operator output is
/// deterministic, even though creation is idempotent either way.
#[derive(Debug, Clone, Default)]
pub struct Structure(pub IndexMap<String, Node>); // https://www.howtocodeit.com/articles/ultimate-guide-rust-newtypes
impl Structure {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with_files(names: &[&str]) -> Self {
        let mut structure = Self::new();
        for name in names {
            structure.0.insert((*name).to_string(), Node::File);
        }
        structure
    }

    pub fn insert_dir(&mut self, key: &str, nested: Structure) {
        self.0.insert(key.to_string(), Node::Dir(nested));
    }

    /// Number of files declared anywhere in the structure, recursively.
    pub fn file_count(&self) -> usize {
        self.0
            .values()
            .map(|node| match node {
                Node::File => 1,
                Node::Dir(nested) => nested.file_count(),
            })
            .sum()
    }

    /// Number of directories declared anywhere in the structure, recursively.
    pub fn dir_count(&self) -> usize {
        self.0
            .values()
            .map(|node| match node {
                Node::File => 0,
                Node::Dir(nested) => 1 + nested.dir_count(),
            })
            .sum()
    }

    /// The fixed stylesheet skeleton for the blog project. The exact name
    /// list is an external contract; do not edit it casually.
    pub fn blog_styles() -> Self {
        let mut root = Self::new();

        root.insert_dir("styles", Self::new());

        root.insert_dir(
            "styles/abstracts",
            Self::with_files(&[
                "_functions.scss",
                "_mixins.scss",
                "_theme-config.scss",
                "_variables.scss",
                "_index.scss",
            ]),
        );

        root.insert_dir(
            "styles/base",
            Self::with_files(&[
                "_animations.scss",
                "_base.scss",
                "_reset.scss",
                "_typography.scss",
                "_index.scss",
            ]),
        );

        root.insert_dir(
            "styles/components",
            Self::with_files(&[
                "_alerts.scss",
                "_badges.scss",
                "_buttons.scss",
                "_card.scss",
                "_forms.scss",
                "_modals.scss",
                "_navigation.scss",
                "_tables.scss",
                "_tooltips.scss",
                "_index.scss",
            ]),
        );

        root.insert_dir(
            "styles/layouts",
            Self::with_files(&[
                "_card-grid.scss",
                "_containers.scss",
                "_footer.scss",
                "_grid.scss",
                "_header.scss",
                "_main-layout.scss",
                "_section.scss",
                "_sidebar.scss",
                "_two-column.scss",
                "_index.scss",
            ]),
        );

        let mut themes = Self::with_files(&[
            "_theme-mixins.scss",
            "_theme-variables.scss",
            "_index.scss",
        ]);
        themes.insert_dir("schemes", Self::with_files(&["_dark.scss", "_light.scss"]));
        root.insert_dir("styles/themes", themes);

        root.insert_dir(
            "styles/utilities",
            Self::with_files(&[
                "_borders.scss",
                "_display.scss",
                "_flexbox.scss",
                "_helpers.scss",
                "_position.scss",
                "_spacing.scss",
                "_text.scss",
                "_index.scss",
            ]),
        );

        root
    }
}
