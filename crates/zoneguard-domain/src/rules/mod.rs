use crate::model::{ImportEdge, PolicyModel};
use crate::policy::EffectiveConfig;
use zoneguard_types::Violation;

mod cross_zone;
mod directory_private;
mod restricted_path;
mod zone_private;


/// Run every rule against one edge, in the fixed reporting order.
pub fn run_all(
    edge: &ImportEdge,
    model: &PolicyModel,
    cfg: &EffectiveConfig,
    out: &mut Vec<Violation>,
) {
    cross_zone::run(edge, model, cfg, out);
    restricted_path::run(edge, model, cfg, out);
    directory_private::run(edge, model, cfg, out);
    zone_private::run(edge, model, cfg, out);
}
