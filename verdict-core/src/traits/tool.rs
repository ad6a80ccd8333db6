use serde_json::Value;

/// Mutable context shared by the tools of one stage run.
///
/// The web-search tool caches its raw results here so the news summary
/// can reuse them without a second provider round trip.
#[derive(Debug, Default)]
pub struct EvidenceContext {
    pub web_search_cache: Option<Value>,
}

/// An evidence-gathering capability available to supporter and critic.
///
/// Tools never fail outward: credential or transport problems degrade
/// to a neutral JSON value and a logged warning, so a stage always
/// completes with whatever evidence it could gather.
pub trait IEvidenceTool: Send {
    /// Registry key and output key in the evidence map.
    fn name(&self) -> &str;

    /// Gather evidence for the claim.
    fn run(&self, claim: &str, ctx: &mut EvidenceContext) -> Value;
}
