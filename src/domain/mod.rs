// Domain katmanı: modeller ve port arayüzleri. std/serde dışında bağımlılık yok.

pub mod model;
pub mod ports;
