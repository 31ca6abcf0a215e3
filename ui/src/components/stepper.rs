//! Quantity stepper. The minus button floors at one; typing a bad value
//! snaps back to one.

use dioxus::prelude::*;

pub const MIN_QUANTITY: u32 = 1;

/// Clamp free-typed input the way the buttons do.
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(MIN_QUANTITY).max(MIN_QUANTITY)
}

#[derive(Props, Clone, PartialEq)]
pub struct QuantityStepperProps {
    pub quantity: Signal<u32>,
}

#[component]
pub fn QuantityStepper(props: QuantityStepperProps) -> Element {
    let mut quantity = props.quantity;
    rsx! {
        div {
            class: "quantity-stepper",
            button {
                class: "qty-btn",
                disabled: quantity() <= MIN_QUANTITY,
                onclick: move |_| {
                    let next = quantity.peek().saturating_sub(1).max(MIN_QUANTITY);
                    quantity.set(next);
                },
                "\u{2212}"
            }
            input {
                r#type: "number",
                min: "{MIN_QUANTITY}",
                value: "{quantity}",
                oninput: move |evt| quantity.set(parse_quantity(&evt.value())),
            }
            button {
                class: "qty-btn",
                onclick: move |_| {
                    let next = *quantity.peek() + 1;
                    quantity.set(next);
                },
                "+"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_values_clamp_to_one() {
        assert_eq!(parse_quantity("5"), 5);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-3"), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
    }
}
