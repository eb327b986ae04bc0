/// Page-level metadata written into the host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub lang: &'static str,
}

pub const PAGE_METADATA: PageMetadata = PageMetadata {
    title: "Interactive Logo Studio",
    description: "Realistic logo exploration for interactive design teams.",
    lang: "en",
};
