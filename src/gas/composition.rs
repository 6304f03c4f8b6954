use aga8::composition::Composition;
use serde::{Deserialize, Serialize};

/// 조성 한 성분: 업계 표기 기호와 몰 퍼센트.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentShare {
    pub symbol: String,
    pub mole_percent: f64,
}

/// 가스 조성. 성분 기호 → 몰 퍼센트의 순서 있는 목록이다.
///
/// 퍼센트 합이 100이 되는지 이 계층에서는 검증하지 않는다. 몰분율(퍼센트/100)로
/// 환산해 엔진에 넘기고, 엔진 자체의 조성 검사 결과가 그대로 전파된다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GasComposition {
    pub shares: Vec<ComponentShare>,
}

/// 조성 구성 시 발생 가능한 오류.
#[derive(Debug)]
pub enum CompositionError {
    /// 알 수 없는 성분 기호
    UnknownComponent(String),
}

impl std::fmt::Display for CompositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompositionError::UnknownComponent(s) => write!(f, "알 수 없는 성분 기호: {s}"),
        }
    }
}

impl std::error::Error for CompositionError {}

impl GasComposition {
    /// (기호, 몰 퍼센트) 쌍 목록으로 조성을 만든다.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            shares: pairs
                .iter()
                .map(|(symbol, mole_percent)| ComponentShare {
                    symbol: (*symbol).to_string(),
                    mole_percent: *mole_percent,
                })
                .collect(),
        }
    }

    /// 1 bara 민감도 시나리오에서 쓰는 기본 천연가스 조성.
    pub fn default_natural_gas() -> Self {
        Self::from_pairs(&[
            ("N2", 1.0),
            ("CO2", 1.0),
            ("C1", 90.0),
            ("C2", 5.0),
            ("C3", 2.0),
            ("iC4", 0.5),
            ("nC4", 0.5),
        ])
    }

    /// 몰 퍼센트 합계. UI 표시용이며 검증에는 쓰지 않는다.
    pub fn mole_percent_total(&self) -> f64 {
        self.shares.iter().map(|s| s.mole_percent).sum()
    }

    /// 엔진 조성 타입으로 환산한다. 퍼센트 → 몰분율(/100).
    pub fn to_engine(&self) -> Result<Composition, CompositionError> {
        let mut comp = empty_engine_composition();
        for share in &self.shares {
            let slot = component_slot(&mut comp, &share.symbol)
                .ok_or_else(|| CompositionError::UnknownComponent(share.symbol.clone()))?;
            *slot += share.mole_percent / 100.0;
        }
        Ok(comp)
    }
}

fn empty_engine_composition() -> Composition {
    Composition {
        methane: 0.0,
        nitrogen: 0.0,
        carbon_dioxide: 0.0,
        ethane: 0.0,
        propane: 0.0,
        isobutane: 0.0,
        n_butane: 0.0,
        isopentane: 0.0,
        n_pentane: 0.0,
        hexane: 0.0,
        heptane: 0.0,
        octane: 0.0,
        nonane: 0.0,
        decane: 0.0,
        hydrogen: 0.0,
        oxygen: 0.0,
        carbon_monoxide: 0.0,
        water: 0.0,
        hydrogen_sulfide: 0.0,
        helium: 0.0,
        argon: 0.0,
    }
}

/// 업계 표기 기호(N2, CO2, C1, iC4, …)를 엔진 조성 필드에 대응시킨다.
fn component_slot<'a>(comp: &'a mut Composition, symbol: &str) -> Option<&'a mut f64> {
    let key = symbol.trim().to_ascii_uppercase();
    let slot = match key.as_str() {
        "C1" | "CH4" | "METHANE" => &mut comp.methane,
        "N2" | "NITROGEN" => &mut comp.nitrogen,
        "CO2" => &mut comp.carbon_dioxide,
        "C2" | "ETHANE" => &mut comp.ethane,
        "C3" | "PROPANE" => &mut comp.propane,
        "IC4" | "I-C4" => &mut comp.isobutane,
        "NC4" | "N-C4" => &mut comp.n_butane,
        "IC5" | "I-C5" => &mut comp.isopentane,
        "NC5" | "N-C5" => &mut comp.n_pentane,
        "C6" | "NC6" => &mut comp.hexane,
        "C7" | "NC7" => &mut comp.heptane,
        "C8" | "NC8" => &mut comp.octane,
        "C9" | "NC9" => &mut comp.nonane,
        "C10" | "NC10" => &mut comp.decane,
        "H2" => &mut comp.hydrogen,
        "O2" => &mut comp.oxygen,
        "CO" => &mut comp.carbon_monoxide,
        "H2O" => &mut comp.water,
        "H2S" => &mut comp.hydrogen_sulfide,
        "HE" => &mut comp.helium,
        "AR" => &mut comp.argon,
        _ => return None,
    };
    Some(slot)
}
