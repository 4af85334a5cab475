use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topping {
    Ham,
    Mushroom,
    Onion,
    Pepper,
    Sausage,
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topping::Ham => "ham",
            Topping::Mushroom => "mushroom",
            Topping::Onion => "onion",
            Topping::Pepper => "pepper",
            Topping::Sausage => "sausage",
        };
        f.write_str(name)
    }
}

/// Toppings staged by a pizza builder, in the order they were added.
///
/// Duplicates are kept. The list belongs to its builder; built pizzas get a
/// frozen copy from [`freeze`](Self::freeze).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToppingList {
    items: Vec<Topping>,
}

impl ToppingList {
    pub fn new() -> Self {
        ToppingList::default()
    }

    pub fn add(&mut self, topping: Topping) {
        self.items.push(topping);
    }

    /// Removes the first matching topping. Absent toppings are ignored.
    pub fn remove(&mut self, topping: Topping) -> bool {
        match self.items.iter().position(|t| *t == topping) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, topping: Topping) -> bool {
        self.items.contains(&topping)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Topping] {
        &self.items
    }

    pub(crate) fn freeze(&self) -> Box<[Topping]> {
        self.items.as_slice().into()
    }
}

impl Extend<Topping> for ToppingList {
    fn extend<I: IntoIterator<Item = Topping>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keeps_order_and_duplicates() {
        let mut list = ToppingList::new();
        list.add(Topping::Pepper);
        list.add(Topping::Onion);
        list.add(Topping::Pepper);

        assert_eq!(
            list.as_slice(),
            &[Topping::Pepper, Topping::Onion, Topping::Pepper]
        );
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut list = ToppingList::new();
        list.extend([Topping::Ham, Topping::Onion, Topping::Ham]);

        assert!(list.remove(Topping::Ham));
        assert_eq!(list.as_slice(), &[Topping::Onion, Topping::Ham]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = ToppingList::new();
        list.add(Topping::Mushroom);

        assert!(!list.remove(Topping::Sausage));
        assert_eq!(list.as_slice(), &[Topping::Mushroom]);
    }

    #[test]
    fn test_freeze_is_independent() {
        let mut list = ToppingList::new();
        list.add(Topping::Pepper);
        let frozen = list.freeze();

        list.add(Topping::Onion);
        list.remove(Topping::Pepper);

        assert_eq!(&*frozen, &[Topping::Pepper]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Topping::Mushroom.to_string(), "mushroom");
    }

    fn topping() -> impl Strategy<Value = Topping> {
        prop_oneof![
            Just(Topping::Ham),
            Just(Topping::Mushroom),
            Just(Topping::Onion),
            Just(Topping::Pepper),
            Just(Topping::Sausage),
        ]
    }

    proptest! {
        #[test]
        fn prop_add_preserves_sequence(toppings in prop::collection::vec(topping(), 0..20)) {
            let mut list = ToppingList::new();
            for t in &toppings {
                list.add(*t);
            }
            prop_assert_eq!(list.as_slice(), toppings.as_slice());
        }

        #[test]
        fn prop_remove_shrinks_by_at_most_one(
            toppings in prop::collection::vec(topping(), 0..20),
            target in topping(),
        ) {
            let mut list = ToppingList::new();
            list.extend(toppings.iter().copied());
            let removed = list.remove(target);

            prop_assert_eq!(removed, toppings.contains(&target));
            prop_assert_eq!(list.len() + usize::from(removed), toppings.len());
        }
    }
}
