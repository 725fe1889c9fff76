use crate::constants::INTAKE_STANDARD;

/// Labels for the intake reference standard, in output order.
pub const INTAKE_STANDARD_NAMES: [&str; 35] = [
    "食品番号",
    "食品名",
    "重量",
    "エネルギー",
    "たんぱく質",
    "脂質",
    "多価不飽和脂肪酸",
    "炭水化物",
    "食物繊維総量",
    "レチノール活性当量",
    "ビタミンD",
    "α-トコフェロール",
    "ビタミンK",
    "ビタミンB1",
    "ビタミンB2",
    "ナイアシン",
    "ビタミンB6",
    "ビタミンB12",
    "葉酸",
    "パントテン酸",
    "ビオチン",
    "ビタミンC",
    "ナトリウム",
    "カリウム",
    "カルシウム",
    "マグネシウム",
    "リン",
    "鉄",
    "亜鉛",
    "銅",
    "マンガン",
    "ヨウ素",
    "セレン",
    "クロム",
    "モリブデン",
];

/// Recognized named label lists. New lists are new rows here.
static NAME_LISTS: &[(&str, &[&str])] = &[(INTAKE_STANDARD, &INTAKE_STANDARD_NAMES)];

/// Look up a named label list.
pub fn lookup(name: &str) -> Option<&'static [&'static str]> {
    NAME_LISTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, labels)| *labels)
}

/// Names of all recognized lists.
pub fn known_names() -> impl Iterator<Item = &'static str> {
    NAME_LISTS.iter().map(|(key, _)| *key)
}
