/// Display name and recipe extracted from the enrichment model's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub display_name: String,
    pub recipe: String,
}
