// src/components/selection.rs

use serde::{Serialize, Deserialize};

use crate::components::stack::{FoundationIndex, TableauIndex};

/// 今「選択中」(移動先のクリック待ち) のゾーンだよ。🎯
///
/// 同時に選べるのは 1 か所だけ。enum なので「Waste と Pile を同時に選択」みたいな
/// ありえない状態はそもそも作れない！
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    Waste,
    Foundation(FoundationIndex),
    Pile(TableauIndex),
}

impl Selection {
    pub fn is_none(self) -> bool {
        self == Selection::None
    }

    pub fn is_armed(self) -> bool {
        !self.is_none()
    }
}
