//! Built-in plant care catalog

use std::collections::BTreeMap;

use crate::advice::Condition;
use crate::models::{
    CareRules, ConditionRule, IdealConditions, IdealRange, PlantRule, PlantType, SeasonalRule,
    StageCare, ToleranceLimits, WateringRhythm,
};
use crate::types::{LocalizedText, Season};

fn text(zh: &str, en: &str) -> LocalizedText {
    LocalizedText::new(zh, en)
}

fn rule(when: Condition, zh: &str, en: &str, priority: u8) -> ConditionRule {
    ConditionRule::new(when, text(zh, en), priority)
}

fn special(when: Condition, zh: &str, en: &str) -> ConditionRule {
    ConditionRule::unranked(when, text(zh, en))
}

fn seasonal(tips: [(&str, &str); 4]) -> Vec<SeasonalRule> {
    [Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
        .into_iter()
        .zip(tips)
        .map(|(season, (zh, en))| SeasonalRule {
            season,
            advice: text(zh, en),
        })
        .collect()
}

fn stage(watering: (&str, &str), fertilizing: Option<(&str, &str)>) -> StageCare {
    StageCare {
        watering: Some(text(watering.0, watering.1)),
        fertilizing: fertilizing.map(|(zh, en)| text(zh, en)),
    }
}

fn stages<const N: usize>(entries: [(&str, StageCare); N]) -> BTreeMap<String, StageCare> {
    entries
        .into_iter()
        .map(|(name, care)| (name.to_string(), care))
        .collect()
}

fn examples(names: [(&str, &str); 4]) -> Vec<LocalizedText> {
    names.into_iter().map(|(zh, en)| text(zh, en)).collect()
}

/// The five plant groups shipped with the crate, in display order
pub fn builtin_entries() -> Vec<PlantRule> {
    vec![succulent(), leafy(), flowering(), vegetable(), herb()]
}

fn succulent() -> PlantRule {
    PlantRule {
        plant_type: PlantType::Succulent,
        name: text("多肉植物", "Succulents"),
        examples: examples([
            ("仙人掌", "cactus"),
            ("景天", "sedum"),
            ("生石花", "lithops"),
            ("芦荟", "aloe"),
        ]),
        ideal_conditions: IdealConditions {
            temperature: IdealRange::new(10.0, 30.0, 22.0),
            humidity: IdealRange::new(30.0, 50.0, 40.0),
            light_hours: IdealRange::new(6.0, 12.0, 8.0),
            watering: WateringRhythm {
                dry_days: 7,
                wet_days: 0,
            },
        },
        tolerance_limits: ToleranceLimits {
            min_temp: 5.0,
            max_temp: 35.0,
            min_humidity: 20.0,
            max_humidity: 60.0,
        },
        care_rules: CareRules {
            temperature: vec![
                rule(
                    Condition::BelowMinTemp,
                    "立即移至室内或温室",
                    "Move indoors or into a greenhouse immediately",
                    1,
                ),
                rule(
                    Condition::TempBelow { value: 10.0 },
                    "减少浇水频率，移至温暖处",
                    "Water less often and move to a warmer spot",
                    2,
                ),
                rule(
                    Condition::TempAbove { value: 30.0 },
                    "移至半阴处，避免正午阳光",
                    "Move to partial shade and avoid midday sun",
                    2,
                ),
                rule(
                    Condition::AboveMaxTemp,
                    "加强通风，喷水降温",
                    "Improve ventilation and mist to cool down",
                    1,
                ),
            ],
            humidity: vec![
                rule(
                    Condition::HumidityAbove { value: 60.0 },
                    "确保排水良好，防止烂根",
                    "Make sure drainage is good to prevent root rot",
                    2,
                ),
                rule(
                    Condition::HumidityBelow { value: 30.0 },
                    "可少量喷雾增加湿度",
                    "A light misting can raise humidity",
                    3,
                ),
            ],
            watering: vec![
                rule(
                    Condition::all(vec![
                        Condition::NoPrecipitation,
                        Condition::SunnyDaysAbove { days: 4 },
                    ]),
                    "每5-7天浇透一次",
                    "Water thoroughly every 5-7 days",
                    2,
                ),
                rule(
                    Condition::PrecipitationAbove { value: 10.0 },
                    "停止浇水，确保排水",
                    "Stop watering and make sure the pot drains",
                    1,
                ),
                rule(
                    Condition::TempAbove { value: 30.0 },
                    "清晨或傍晚少量浇水",
                    "Water lightly in the early morning or evening",
                    2,
                ),
            ],
            seasonal: seasonal([
                ("开始增加浇水频率", "Start watering more often"),
                (
                    "避免正午浇水，注意通风",
                    "Avoid watering at noon and keep air moving",
                ),
                (
                    "逐渐减少浇水，准备越冬",
                    "Gradually water less to prepare for winter",
                ),
                (
                    "保持土壤干燥，每月浇水1次",
                    "Keep the soil dry and water once a month",
                ),
            ]),
            special: vec![
                special(
                    Condition::WindAbove { value: 6.0 },
                    "移至避风处，防止倒伏",
                    "Move out of the wind so plants do not topple",
                ),
                special(
                    Condition::UvAbove { value: 8.0 },
                    "提供遮阳网，防止晒伤",
                    "Put up shade cloth to prevent sunburn",
                ),
            ],
        },
        growth_stages: stages([
            ("dormant", stage(("每月1次", "once a month"), None)),
            ("growing", stage(("每7-10天", "every 7-10 days"), None)),
            ("flowering", stage(("每5-7天", "every 5-7 days"), None)),
        ]),
    }
}

fn leafy() -> PlantRule {
    PlantRule {
        plant_type: PlantType::Leafy,
        name: text("观叶植物", "Foliage plants"),
        examples: examples([
            ("绿萝", "pothos"),
            ("龟背竹", "monstera"),
            ("常春藤", "ivy"),
            ("吊兰", "spider plant"),
        ]),
        ideal_conditions: IdealConditions {
            temperature: IdealRange::new(15.0, 30.0, 24.0),
            humidity: IdealRange::new(40.0, 70.0, 60.0),
            light_hours: IdealRange::new(4.0, 8.0, 6.0),
            watering: WateringRhythm {
                dry_days: 3,
                wet_days: 1,
            },
        },
        tolerance_limits: ToleranceLimits {
            min_temp: 10.0,
            max_temp: 35.0,
            min_humidity: 30.0,
            max_humidity: 80.0,
        },
        care_rules: CareRules {
            temperature: vec![
                rule(
                    Condition::BelowMinTemp,
                    "移至室内温暖处，远离窗户",
                    "Move somewhere warm indoors, away from windows",
                    1,
                ),
                rule(
                    Condition::TempBelow { value: 15.0 },
                    "减少浇水，保持土壤微湿",
                    "Water less and keep the soil slightly moist",
                    2,
                ),
                rule(
                    Condition::TempAbove { value: 30.0 },
                    "增加空气湿度，叶片喷雾",
                    "Raise air humidity and mist the leaves",
                    2,
                ),
                rule(
                    Condition::AboveMaxTemp,
                    "移至阴凉处，加强通风",
                    "Move to shade and improve ventilation",
                    1,
                ),
            ],
            humidity: vec![
                rule(
                    Condition::HumidityBelow { value: 40.0 },
                    "使用加湿器或托盘加水",
                    "Use a humidifier or a pebble tray with water",
                    2,
                ),
                rule(
                    Condition::HumidityAbove { value: 70.0 },
                    "加强通风，防止霉菌滋生",
                    "Improve ventilation to keep mould away",
                    2,
                ),
            ],
            watering: vec![
                rule(
                    Condition::all(vec![
                        Condition::TopsoilDry,
                        Condition::HumidityBelow { value: 50.0 },
                    ]),
                    "浇透水直到排水孔出水",
                    "Water until it runs out of the drainage hole",
                    2,
                ),
                rule(
                    Condition::PrecipitationAbove { value: 5.0 },
                    "减少人工浇水",
                    "Cut back on manual watering",
                    3,
                ),
                rule(
                    Condition::TempAbove { value: 28.0 },
                    "每2-3天浇水，保持湿润",
                    "Water every 2-3 days to keep the soil moist",
                    2,
                ),
            ],
            seasonal: seasonal([
                ("开始施肥，每2周一次", "Start feeding every 2 weeks"),
                (
                    "保持土壤湿润，定期喷雾",
                    "Keep the soil moist and mist regularly",
                ),
                ("减少施肥，清理枯叶", "Feed less and clear dead leaves"),
                ("减少浇水，停止施肥", "Water less and stop feeding"),
            ]),
            special: vec![
                special(
                    Condition::WindAbove { value: 5.0 },
                    "移至避风处，保护叶片",
                    "Move out of the wind to protect the leaves",
                ),
                special(
                    Condition::SunlightBelow { hours: 4.0 },
                    "补充人工光源",
                    "Add a grow light",
                ),
            ],
        },
        growth_stages: stages([
            (
                "dormant",
                stage(
                    ("土壤干透再浇", "wait until the soil dries out"),
                    Some(("停止", "stop")),
                ),
            ),
            (
                "growing",
                stage(
                    ("表土干即浇", "water when the topsoil is dry"),
                    Some(("每2周一次", "every 2 weeks")),
                ),
            ),
            (
                "new_leaf",
                stage(
                    ("保持湿润", "keep moist"),
                    Some(("含氮肥料", "nitrogen-rich fertilizer")),
                ),
            ),
        ]),
    }
}

fn flowering() -> PlantRule {
    PlantRule {
        plant_type: PlantType::Flowering,
        name: text("开花植物", "Flowering plants"),
        examples: examples([
            ("玫瑰", "rose"),
            ("百合", "lily"),
            ("郁金香", "tulip"),
            ("菊花", "chrysanthemum"),
        ]),
        ideal_conditions: IdealConditions {
            temperature: IdealRange::new(10.0, 28.0, 20.0),
            humidity: IdealRange::new(40.0, 65.0, 50.0),
            light_hours: IdealRange::new(6.0, 10.0, 8.0),
            watering: WateringRhythm {
                dry_days: 2,
                wet_days: 0,
            },
        },
        tolerance_limits: ToleranceLimits {
            min_temp: 5.0,
            max_temp: 32.0,
            min_humidity: 35.0,
            max_humidity: 75.0,
        },
        care_rules: CareRules {
            temperature: vec![
                rule(
                    Condition::TempBelow { value: 5.0 },
                    "覆盖保温材料或移至室内",
                    "Cover with insulation or move indoors",
                    1,
                ),
                rule(
                    Condition::TempBelow { value: 10.0 },
                    "减少浇水，保护花蕾",
                    "Water less and protect the buds",
                    2,
                ),
                rule(
                    Condition::TempAbove { value: 28.0 },
                    "遮阳防晒，增加浇水",
                    "Shade from the sun and water more",
                    1,
                ),
                rule(
                    Condition::TempAbove { value: 32.0 },
                    "移至阴凉处，喷水降温",
                    "Move to shade and mist to cool down",
                    1,
                ),
            ],
            humidity: vec![
                rule(
                    Condition::HumidityAbove { value: 70.0 },
                    "加强通风，防止霉菌病",
                    "Improve ventilation to prevent mould disease",
                    2,
                ),
                rule(
                    Condition::HumidityBelow { value: 40.0 },
                    "早晨喷雾增加湿度",
                    "Mist in the morning to raise humidity",
                    3,
                ),
            ],
            watering: vec![
                rule(
                    Condition::all(vec![
                        Condition::Flowering,
                        Condition::TempAbove { value: 25.0 },
                    ]),
                    "每天浇水，避免浇到花朵",
                    "Water daily without wetting the flowers",
                    1,
                ),
                rule(
                    Condition::all(vec![
                        Condition::PrecipitationBelow { value: 5.0 },
                        Condition::SunnyDaysAbove { days: 3 },
                    ]),
                    "每1-2天浇透一次",
                    "Water thoroughly every 1-2 days",
                    2,
                ),
                rule(
                    Condition::PrecipitationAbove { value: 10.0 },
                    "停止浇水，注意排水",
                    "Stop watering and watch the drainage",
                    1,
                ),
            ],
            seasonal: seasonal([
                (
                    "开始施肥，促进花芽形成",
                    "Start feeding to encourage flower buds",
                ),
                (
                    "及时摘除残花，保持通风",
                    "Deadhead promptly and keep air moving",
                ),
                ("减少浇水，准备休眠", "Water less to prepare for dormancy"),
                (
                    "保护根部，覆盖保温材料",
                    "Protect the roots with a layer of insulation",
                ),
            ]),
            special: vec![
                special(
                    Condition::HeavyRain,
                    "雨后检查花朵，摘除受损部分",
                    "Check the flowers after rain and remove damaged parts",
                ),
                special(
                    Condition::FrostWarning,
                    "覆盖花朵或移至室内",
                    "Cover the flowers or move them indoors",
                ),
            ],
        },
        growth_stages: stages([
            (
                "budding",
                stage(
                    ("保持土壤湿润", "keep the soil moist"),
                    Some(("高磷肥", "high-phosphorus fertilizer")),
                ),
            ),
            (
                "flowering",
                stage(("避免干旱", "never let it dry out"), Some(("停止", "stop"))),
            ),
            (
                "post_flower",
                stage(
                    ("减少", "reduce"),
                    Some(("平衡肥", "balanced fertilizer")),
                ),
            ),
        ]),
    }
}

fn vegetable() -> PlantRule {
    PlantRule {
        plant_type: PlantType::Vegetable,
        name: text("蔬菜类", "Vegetables"),
        examples: examples([
            ("番茄", "tomato"),
            ("黄瓜", "cucumber"),
            ("辣椒", "pepper"),
            ("生菜", "lettuce"),
        ]),
        ideal_conditions: IdealConditions {
            temperature: IdealRange::new(15.0, 30.0, 25.0),
            humidity: IdealRange::new(50.0, 70.0, 60.0),
            light_hours: IdealRange::new(6.0, 10.0, 8.0),
            watering: WateringRhythm {
                dry_days: 1,
                wet_days: 0,
            },
        },
        tolerance_limits: ToleranceLimits {
            min_temp: 10.0,
            max_temp: 35.0,
            min_humidity: 40.0,
            max_humidity: 80.0,
        },
        care_rules: CareRules {
            temperature: vec![
                rule(
                    Condition::TempBelow { value: 12.0 },
                    "覆盖保温膜或使用温室",
                    "Cover with frost film or use a greenhouse",
                    1,
                ),
                rule(
                    Condition::TempBelow { value: 15.0 },
                    "生长缓慢，减少浇水",
                    "Growth slows down, water less",
                    2,
                ),
                rule(
                    Condition::TempAbove { value: 30.0 },
                    "增加浇水，遮阳防晒",
                    "Water more and shade from the sun",
                    1,
                ),
                rule(
                    Condition::TempAbove { value: 35.0 },
                    "加强通风，喷水降温",
                    "Improve ventilation and mist to cool down",
                    1,
                ),
            ],
            humidity: vec![
                rule(
                    Condition::HumidityAbove { value: 75.0 },
                    "加强通风，预防真菌病",
                    "Improve ventilation to prevent fungal disease",
                    2,
                ),
                rule(
                    Condition::HumidityBelow { value: 45.0 },
                    "早晨浇水，覆盖保墒",
                    "Water in the morning and mulch to hold moisture",
                    2,
                ),
            ],
            watering: vec![
                rule(
                    Condition::all(vec![
                        Condition::Fruiting,
                        Condition::TempAbove { value: 25.0 },
                    ]),
                    "每天早晨浇透水",
                    "Water thoroughly every morning",
                    1,
                ),
                rule(
                    Condition::PrecipitationBelow { value: 5.0 },
                    "每1-2天浇水",
                    "Water every 1-2 days",
                    2,
                ),
                rule(
                    Condition::PrecipitationAbove { value: 15.0 },
                    "停止浇水，注意排水",
                    "Stop watering and watch the drainage",
                    1,
                ),
            ],
            seasonal: seasonal([
                ("播种或移栽，开始施肥", "Sow or transplant and start feeding"),
                ("定期浇水，防治病虫害", "Water regularly and control pests"),
                ("收获，清理田园", "Harvest and clear the beds"),
                ("温室种植或休耕", "Grow under glass or leave fallow"),
            ]),
            special: vec![
                special(
                    Condition::HighUv,
                    "果实遮阳防日灼",
                    "Shade the fruit against sunscald",
                ),
                special(
                    Condition::PestAlert,
                    "使用生物防治或有机农药",
                    "Use biological control or organic pesticide",
                ),
            ],
        },
        growth_stages: stages([
            (
                "seedling",
                stage(
                    ("保持表土湿润", "keep the topsoil moist"),
                    Some(("稀薄液肥", "diluted liquid feed")),
                ),
            ),
            (
                "vegetative",
                stage(
                    ("充足水分", "plenty of water"),
                    Some(("高氮肥", "high-nitrogen fertilizer")),
                ),
            ),
            (
                "fruiting",
                stage(
                    ("避免干旱", "never let it dry out"),
                    Some(("高钾肥", "high-potassium fertilizer")),
                ),
            ),
        ]),
    }
}

fn herb() -> PlantRule {
    PlantRule {
        plant_type: PlantType::Herb,
        name: text("草本香草", "Herbs"),
        examples: examples([
            ("薄荷", "mint"),
            ("罗勒", "basil"),
            ("迷迭香", "rosemary"),
            ("百里香", "thyme"),
        ]),
        ideal_conditions: IdealConditions {
            temperature: IdealRange::new(15.0, 28.0, 22.0),
            humidity: IdealRange::new(40.0, 60.0, 50.0),
            light_hours: IdealRange::new(6.0, 10.0, 8.0),
            watering: WateringRhythm {
                dry_days: 2,
                wet_days: 0,
            },
        },
        tolerance_limits: ToleranceLimits {
            min_temp: 5.0,
            max_temp: 35.0,
            min_humidity: 30.0,
            max_humidity: 70.0,
        },
        care_rules: CareRules {
            temperature: vec![
                rule(
                    Condition::TempBelow { value: 10.0 },
                    "移至室内或温室",
                    "Move indoors or into a greenhouse",
                    1,
                ),
                rule(
                    Condition::TempAbove { value: 30.0 },
                    "遮阳，增加浇水",
                    "Shade and water more",
                    2,
                ),
            ],
            humidity: Vec::new(),
            watering: vec![
                rule(Condition::TopsoilDry, "浇透水", "Water thoroughly", 2),
                rule(
                    Condition::HumidityAbove { value: 65.0 },
                    "减少浇水，防止烂根",
                    "Water less to prevent root rot",
                    2,
                ),
            ],
            seasonal: Vec::new(),
            special: vec![
                special(
                    Condition::FrequentHarvest,
                    "增加施肥频率",
                    "Feed more often",
                ),
                special(
                    Condition::Flowering,
                    "及时摘除花蕾保持风味",
                    "Pinch off flower buds to keep the flavour",
                ),
            ],
        },
        growth_stages: BTreeMap::new(),
    }
}
