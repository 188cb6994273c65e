//! Medication Reminder - 用药提醒语音文案
//!
//! 药品记录由仪表盘层提供，这里只读取，不持有也不修改。

use serde::{Deserialize, Serialize};

/// 提醒语速（相对平台默认值）
pub const REMINDER_RATE: f32 = 0.8;

/// 提醒音调（相对平台默认值）
pub const REMINDER_PITCH: f32 = 1.1;

/// 用药提醒所需的药品字段
///
/// 仪表盘记录中的其它字段（times、nextDose 等）反序列化时忽略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationReminder {
    pub name: String,
    pub dosage: String,
    pub instructions: String,
}

impl MedicationReminder {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            instructions: instructions.into(),
        }
    }

    /// 生成提醒语音
    pub fn utterance(&self) -> Utterance {
        Utterance {
            text: format!(
                "Time to take your {}, {}. {}",
                self.name, self.dosage, self.instructions
            ),
            rate: REMINDER_RATE,
            pitch: REMINDER_PITCH,
        }
    }
}

/// 待播报的一句话及其播放参数
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// 语速倍率，1.0 为平台默认
    pub rate: f32,
    /// 音调倍率，1.0 为平台默认
    pub pitch: f32,
}

impl Utterance {
    /// 使用平台默认语速和音调
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}
