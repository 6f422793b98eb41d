use std::fmt;

use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    #[default]
    Spring,
    Summer,
}

impl Skin {
    pub fn factory(self) -> Box<dyn SkinFactory> {
        debug!(skin = %self, "selecting skin factory");
        match self {
            Skin::Spring => Box::new(SpringSkinFactory),
            Skin::Summer => Box::new(SummerSkinFactory),
        }
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skin::Spring => f.write_str("spring"),
            Skin::Summer => f.write_str("summer"),
        }
    }
}

pub trait Button {
    fn skin(&self) -> Skin;
    fn render(&self) -> String;

    fn display(&self) {
        println!("{}", self.render());
    }
}

pub trait TextField {
    fn skin(&self) -> Skin;
    fn render(&self) -> String;

    fn display(&self) {
        println!("{}", self.render());
    }
}

pub trait ComboBox {
    fn skin(&self) -> Skin;
    fn render(&self) -> String;

    fn display(&self) {
        println!("{}", self.render());
    }
}

pub trait SkinFactory {
    fn skin(&self) -> Skin;

    fn create_button(&self) -> Box<dyn Button>;
    fn create_text_field(&self) -> Box<dyn TextField>;
    fn create_combo_box(&self) -> Box<dyn ComboBox>;
}

macro_rules! skinned_widget {
    ($name:ident, $widget:ident, $skin:expr, $text:literal) => {
        pub struct $name;

        impl $widget for $name {
            fn skin(&self) -> Skin {
                $skin
            }

            fn render(&self) -> String {
                $text.to_string()
            }
        }
    };
}

skinned_widget!(SpringButton, Button, Skin::Spring, "Displaying light green button");
skinned_widget!(SpringTextField, TextField, Skin::Spring, "Displaying green-bordered text field");
skinned_widget!(SpringComboBox, ComboBox, Skin::Spring, "Displaying green-bordered combo box");
skinned_widget!(SummerButton, Button, Skin::Summer, "Displaying light blue button");
skinned_widget!(SummerTextField, TextField, Skin::Summer, "Displaying blue-bordered text field");
skinned_widget!(SummerComboBox, ComboBox, Skin::Summer, "Displaying blue-bordered combo box");

pub struct SpringSkinFactory;

impl SkinFactory for SpringSkinFactory {
    fn skin(&self) -> Skin {
        Skin::Spring
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(SpringButton)
    }

    fn create_text_field(&self) -> Box<dyn TextField> {
        Box::new(SpringTextField)
    }

    fn create_combo_box(&self) -> Box<dyn ComboBox> {
        Box::new(SpringComboBox)
    }
}

pub struct SummerSkinFactory;

impl SkinFactory for SummerSkinFactory {
    fn skin(&self) -> Skin {
        Skin::Summer
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(SummerButton)
    }

    fn create_text_field(&self) -> Box<dyn TextField> {
        Box::new(SummerTextField)
    }

    fn create_combo_box(&self) -> Box<dyn ComboBox> {
        Box::new(SummerComboBox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_widget_matches_factory_skin() {
        for skin in [Skin::Spring, Skin::Summer] {
            let factory = skin.factory();
            assert_eq!(factory.skin(), skin);
            assert_eq!(factory.create_button().skin(), skin);
            assert_eq!(factory.create_text_field().skin(), skin);
            assert_eq!(factory.create_combo_box().skin(), skin);
        }
    }

    #[test]
    fn test_spring_widgets_render_green() {
        let factory = SpringSkinFactory;
        assert_eq!(factory.create_button().render(), "Displaying light green button");
        assert!(factory.create_text_field().render().contains("green"));
        assert!(factory.create_combo_box().render().contains("green"));
    }

    #[test]
    fn test_summer_widgets_render_blue() {
        let factory = SummerSkinFactory;
        assert!(factory.create_button().render().contains("blue"));
        assert!(factory.create_text_field().render().contains("blue"));
        assert!(factory.create_combo_box().render().contains("blue"));
    }
}
