use crate::content::RegionAtlas;
use crate::game_state::{Judgement, RoundRules, Session};
use game_types::{GameKind, MapKind, MapRegion};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct MapExplorer;

pub type MapSession = Session<MapExplorer>;

#[derive(Debug, Clone, Default)]
pub struct MapProgress {
    pub found: BTreeSet<String>,
}

impl RoundRules for MapExplorer {
    type Target = MapRegion;
    type Guess = str;
    type Progress = MapProgress;
    /// Id of the region to highlight
    type Hint = String;

    const GAME: GameKind = GameKind::MapExplorer;

    fn judge(target: &MapRegion, region_id: &str, progress: &mut MapProgress) -> Judgement {
        if region_id != target.id {
            return Judgement::Miss;
        }
        progress.found.insert(target.id.clone());
        Judgement::Hit {
            completes_target: true,
        }
    }

    fn hint(target: &MapRegion, _progress: &MapProgress) -> String {
        target.id.clone()
    }

    fn solution(target: &MapRegion) -> String {
        target.name.clone()
    }

    fn fun_fact(target: &MapRegion) -> Option<String> {
        Some(target.fun_fact.clone())
    }

    fn mastered(progress: &MapProgress) -> Vec<String> {
        progress.found.iter().cloned().collect()
    }
}

impl Session<MapExplorer> {
    pub fn map_kind(&self) -> MapKind {
        RegionAtlas::map_kind(self.state.difficulty)
    }

    /// Name of the region the player is asked to find
    pub fn prompt(&self) -> Option<&str> {
        self.current_target().map(|r| r.name.as_str())
    }

    pub fn is_found(&self, region_id: &str) -> bool {
        self.progress().found.contains(region_id)
    }
}
