//! Standard enumerations used by built-in element schemas.
//!
//! Each enumeration is persisted by variant name (e.g. `"PixelsFromLeft"`),
//! and every enumeration is also reachable through the type-erased
//! [`EnumValue`] / [`EnumKind`] pair so that a variable can be typed as
//! "some standard enum" without losing the concrete value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::value::Variant;

macro_rules! standard_enums {
    ($(
        $(#[$meta:meta])*
        $name:ident { $($variant:ident),+ $(,)? }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            pub enum $name {
                $($variant),+
            }

            impl $name {
                /// All values in declaration order.
                pub const ALL: &'static [Self] = &[$(Self::$variant),+];

                /// Returns the value name as persisted in project files.
                pub fn as_str(&self) -> &'static str {
                    match self {
                        $(Self::$variant => stringify!($variant)),+
                    }
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $name {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    match s.trim() {
                        $(stringify!($variant) => Ok(Self::$variant),)+
                        _ => Err(format!("Unknown {} value: {}", stringify!($name), s)),
                    }
                }
            }

            impl From<$name> for EnumValue {
                fn from(value: $name) -> Self {
                    EnumValue::$name(value)
                }
            }

            impl From<$name> for Variant {
                fn from(value: $name) -> Self {
                    Variant::Enum(EnumValue::$name(value))
                }
            }
        )+

        /// Identifies one of the standard enumerations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum EnumKind {
            $($name),+
        }

        impl EnumKind {
            /// All enumeration kinds.
            pub const ALL: &'static [Self] = &[$(Self::$name),+];

            /// The type name used in type tags (e.g. `"PositionUnitType"`).
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name)),+
                }
            }

            /// Looks up a kind by its type name.
            pub fn from_type_name(name: &str) -> Option<Self> {
                match name.trim() {
                    $(stringify!($name) => Some(Self::$name),)+
                    _ => None,
                }
            }

            /// Every value of this enumeration, in declaration order.
            pub fn values(&self) -> Vec<EnumValue> {
                match self {
                    $(Self::$name => $name::ALL.iter().copied().map(EnumValue::from).collect()),+
                }
            }

            /// Parses a value name belonging to this enumeration.
            pub fn parse_value(&self, value: &str) -> Option<EnumValue> {
                match self {
                    $(Self::$name => value.parse::<$name>().ok().map(EnumValue::from)),+
                }
            }
        }

        /// A value of any standard enumeration.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum EnumValue {
            $($name($name)),+
        }

        impl EnumValue {
            /// The enumeration this value belongs to.
            pub fn kind(&self) -> EnumKind {
                match self {
                    $(Self::$name(_) => EnumKind::$name),+
                }
            }

            /// The variant name of the wrapped value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name(value) => value.as_str()),+
                }
            }
        }
    };
}

standard_enums! {
    /// How an X or Y value is interpreted relative to the parent.
    PositionUnitType {
        PixelsFromLeft,
        PixelsFromTop,
        PercentageWidth,
        PercentageHeight,
        PixelsFromRight,
        PixelsFromBottom,
        PixelsFromCenterX,
        PixelsFromCenterY,
        PixelsFromCenterYInverted,
        PixelsFromBaseline,
    }

    /// How a Width or Height value is interpreted.
    DimensionUnitType {
        Absolute,
        Percentage,
        PercentageOfSourceFile,
        RelativeToContainer,
        RelativeToChildren,
        PercentageOfOtherDimension,
        MaintainFileAspectRatio,
        Ratio,
        AbsoluteMultipliedByFontScale,
        ScreenPixel,
    }

    HorizontalAlignment {
        Left,
        Center,
        Right,
    }

    /// Vertical alignment. `TextBaseline` only applies to Text origins.
    VerticalAlignment {
        Top,
        Center,
        Bottom,
        TextBaseline,
    }

    TextOverflowVerticalMode {
        SpillOver,
        TruncateLine,
    }

    TextOverflowHorizontalMode {
        TruncateWord,
        EllipsisLetter,
    }

    /// Color blending mode used when drawing.
    Blend {
        Normal,
        Additive,
        Replace,
        SubtractAlpha,
        ReplaceAlpha,
        MinAlpha,
    }

    /// Which part of a texture is displayed.
    TextureAddress {
        EntireTexture,
        Custom,
        DimensionsBased,
    }

    /// How a container arranges its children.
    ChildrenLayout {
        Regular,
        TopToBottomStack,
        LeftToRightStack,
        AutoGridHorizontal,
        AutoGridVertical,
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl PositionUnitType {
    /// Returns true for units that only make sense on the vertical axis.
    pub fn is_vertical_only(&self) -> bool {
        matches!(
            self,
            Self::PixelsFromTop
                | Self::PercentageHeight
                | Self::PixelsFromBottom
                | Self::PixelsFromCenterY
                | Self::PixelsFromCenterYInverted
                | Self::PixelsFromBaseline
        )
    }

    /// Returns true for units that only make sense on the horizontal axis.
    pub fn is_horizontal_only(&self) -> bool {
        matches!(
            self,
            Self::PixelsFromLeft
                | Self::PixelsFromCenterX
                | Self::PercentageWidth
                | Self::PixelsFromRight
        )
    }
}

impl DimensionUnitType {
    /// Returns true for units that depend on an assigned source file.
    pub fn depends_on_file(&self) -> bool {
        matches!(
            self,
            Self::PercentageOfSourceFile | Self::MaintainFileAspectRatio
        )
    }
}
