/// Declare a fieldless enum whose variants map to fixed operand words.
///
/// Generates `from_word`, `word` and `name` plus a `From` conversion into the
/// underlying integer. `name` is the variant identifier as written.
macro_rules! word_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[repr($repr)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Decode from an operand word. Unknown values yield `None`.
            pub fn from_word(word: $repr) -> Option<Self> {
                match word {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            #[inline]
            pub fn word(self) -> $repr {
                self as $repr
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value as $repr
            }
        }
    };
}

/// Declare a bitmask operand with named flags.
macro_rules! mask_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$fmeta:meta])* $flag:ident = $bit:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
        #[repr(transparent)]
        $vis struct $name(pub u32);

        impl $name {
            pub const NONE: Self = Self(0);
            $($(#[$fmeta])* pub const $flag: Self = Self($bit);)+

            const LABELS: &'static [(u32, &'static str)] = &[$(($bit, $label)),+];

            #[inline]
            pub fn word(self) -> u32 {
                self.0
            }

            #[inline]
            pub fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Flag names joined by `|`, `None` for an empty mask. Unknown bits
            /// are rendered in hex.
            pub fn describe(word: u32) -> String {
                if word == 0 {
                    return "None".to_string();
                }
                let mut parts = Vec::new();
                let mut rest = word;
                for &(bit, label) in Self::LABELS {
                    if word & bit != 0 {
                        parts.push(label.to_string());
                        rest &= !bit;
                    }
                }
                if rest != 0 {
                    parts.push(format!("{rest:#x}"));
                }
                parts.join("|")
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}
