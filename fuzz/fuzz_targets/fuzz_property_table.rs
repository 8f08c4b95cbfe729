#![no_main]

use libfuzzer_sys::fuzz_target;
use propstore::{Attributes, JsValue, ObjectClass, Runtime};

/// Small name space so sets and deletes collide often
const NAMES: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "0", "1", "2", "10", "01", "length",
];

fuzz_target!(|data: &[u8]| {
    if data.len() > 4_096 {
        return;
    }

    let mut rt = Runtime::new();
    let proto = rt.new_object(ObjectClass::Object, None);
    let arr = rt.new_object(ObjectClass::Array, Some(proto));
    let targets = [proto, arr];

    for chunk in data.chunks(2) {
        let [op, arg] = *chunk else {
            break;
        };
        let target = targets[(arg & 1) as usize];
        let name = NAMES[(arg >> 1) as usize % NAMES.len()];

        match op % 5 {
            0 => {
                rt.set_property(target, name, JsValue::from(arg as i32)).unwrap();
            }
            1 => {
                rt.set_property(target, name, JsValue::Null).unwrap().attributes =
                    Attributes::DONT_ENUM;
            }
            2 => {
                rt.delete_property(target, name).unwrap();
            }
            3 => {
                let io = rt.new_iterator(arr, op & 8 != 0).unwrap();
                let mut seen = Vec::new();
                while let Some(name) = rt.next_iterator(io).unwrap() {
                    assert!(!seen.contains(&name), "duplicate name {}", name);
                    seen.push(name);
                }
            }
            _ => {
                rt.resize_array(arr, u32::from(arg % 16)).unwrap();
            }
        }

        for id in targets {
            rt.heap().get(id).unwrap().properties.validate().unwrap();
        }
    }
});
