extern crate proc_macro;

use proc_macro::{TokenStream, TokenTree};

fn get_type_name(input: TokenStream) -> String {
    let mut iter = input.into_iter();
    loop {
        match iter.next() {
            Some(TokenTree::Ident(ident)) => {
                if ident.to_string() == "struct" {
                    return iter.next().unwrap().to_string()
                }
            },
            None => break,
            _ => (),
        }
    }
    panic!("#[derive(Event)] is only supported on structs");
}

// The struct must implement EventType and carry a `handled: bool` field.
#[proc_macro_derive(Event)]
pub fn derive_event(input: TokenStream) -> TokenStream {
    let type_name = get_type_name(input);

    format!("
#[allow(non_snake_case)]
mod {0}_Event_impls {{
    use std::any::Any;
    use crate::event::{{Event, EventCategory, EventKind, EventType}};
    impl Event for super::{0} {{
        fn kind(&self) -> EventKind {{
            <Self as EventType>::KIND
        }}

        fn name(&self) -> &'static str {{
            <Self as EventType>::NAME
        }}

        fn categories(&self) -> EventCategory {{
            <Self as EventType>::CATEGORIES
        }}

        fn handled(&self) -> bool {{
            self.handled
        }}

        fn set_handled(&mut self, handled: bool) {{
            self.handled = handled;
        }}

        fn as_any(&self) -> &dyn Any {{
            self
        }}
    }}
}}", type_name).parse().unwrap()
}
