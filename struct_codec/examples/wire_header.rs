//! Build and parse a small network frame header.

use struct_codec::{Layout, Value, unpack_at};

fn main() -> struct_codec::Result<()> {
    // magic, version, flags, payload length, then a length-prefixed name.
    let header = Layout::new("> c4 B B I4")?;
    println!("header '{}': {:?} bytes, {} fields", header, header.size(), header.arity());

    let mut frame = header.pack(&[
        Value::from("WIRE"),
        Value::from(1u8),
        Value::from(0b1010u8),
        Value::from(11u32),
    ])?;
    struct_codec::pack_into(">H c0", &[Value::from(5u16), Value::from("probe")], &mut frame)?;
    println!("frame: {:02x?}", frame);

    let parsed = header.unpack(&frame)?;
    for (i, value) in parsed.values.iter().enumerate() {
        println!("  field {}: {:?}", i, value);
    }

    let name = unpack_at(">H c0", &frame, parsed.next)?;
    println!("  name: {:?} (next position {})", name.values[1], name.next);
    Ok(())
}
