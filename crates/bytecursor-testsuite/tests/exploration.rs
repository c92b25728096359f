use bytecursor::{ByteCursor, ByteOrder};
use bytecursor_testsuite::counting_bytes;

#[test]
fn explore_order_and_offset_restores_both() {
    let bytes = counting_bytes(10);
    let mut cursor = ByteCursor::new(&bytes);
    cursor.skip(6).unwrap();
    assert_eq!(cursor.byte_order(), ByteOrder::LittleEndian);
    assert_eq!(cursor.pos(), 6);

    {
        let explorer = cursor.explore(ByteOrder::BigEndian, 2).unwrap();
        assert_eq!(explorer.byte_order(), ByteOrder::BigEndian);
        assert_eq!(explorer.retreat_offset(), 6);
        assert_eq!(explorer.retreat_byte_order(), ByteOrder::LittleEndian);
        assert_eq!(explorer.pos(), 2);
    }

    assert_eq!(cursor.byte_order(), ByteOrder::LittleEndian);
    assert_eq!(cursor.pos(), 6);
}

#[test]
fn reads_inside_scope_do_not_leak() {
    let bytes = counting_bytes(10);
    let mut cursor = ByteCursor::new(&bytes);
    cursor.skip(1).unwrap();

    let mut explorer = cursor.explore_at(4).unwrap();
    assert_eq!(explorer.read_u32().unwrap(), 0x0807_0605);
    explorer.set_byte_order(ByteOrder::BigEndian);
    assert_eq!(explorer.read_u16().unwrap(), 0x090A);
    assert!(explorer.eof());
    explorer.close();

    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.byte_order(), ByteOrder::LittleEndian);
    assert_eq!(cursor.read_u8().unwrap(), 2);
}

#[test]
fn explore_order_keeps_position() {
    let bytes = [0x00, 0x01, 0x02];
    let mut cursor = ByteCursor::new(&bytes);
    cursor.skip(1).unwrap();

    {
        let mut explorer = cursor.explore_order(ByteOrder::BigEndian);
        assert_eq!(explorer.pos(), 1);
        assert_eq!(explorer.read_u16().unwrap(), 0x0102);
    }

    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.byte_order(), ByteOrder::LittleEndian);
    assert_eq!(cursor.read_u16().unwrap(), 0x0201);
}

#[test]
fn explore_at_keeps_byte_order() {
    let bytes = counting_bytes(4);
    let mut cursor = ByteCursor::with_byte_order(ByteOrder::BigEndian, &bytes);

    {
        let explorer = cursor.explore_at(2).unwrap();
        assert_eq!(explorer.byte_order(), ByteOrder::BigEndian);
        assert_eq!(explorer.peek_u16().unwrap(), 0x0304);
    }

    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.byte_order(), ByteOrder::BigEndian);
}

#[test]
fn nested_scopes_restore_in_reverse_order() {
    let bytes = counting_bytes(10);
    let mut cursor = ByteCursor::new(&bytes);
    cursor.skip(1).unwrap();

    {
        let mut outer = cursor.explore(ByteOrder::BigEndian, 3).unwrap();
        outer.read_u16().unwrap();
        assert_eq!(outer.pos(), 5);

        {
            let mut inner = outer.explore_at(8).unwrap();
            assert_eq!(inner.retreat_offset(), 5);
            assert_eq!(inner.retreat_byte_order(), ByteOrder::BigEndian);
            inner.set_byte_order(ByteOrder::LittleEndian);
            assert_eq!(inner.read_u16().unwrap(), 0x0A09);
        }

        assert_eq!(outer.pos(), 5);
        assert_eq!(outer.byte_order(), ByteOrder::BigEndian);
    }

    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.byte_order(), ByteOrder::LittleEndian);
}

#[test]
fn exhausted_position_is_restored() {
    let bytes = counting_bytes(2);
    let mut cursor = ByteCursor::new(&bytes);
    cursor.read_u16().unwrap();
    assert_eq!(cursor.pos(), 2);

    {
        let mut explorer = cursor.explore_at(0).unwrap();
        assert_eq!(explorer.read_u8().unwrap(), 1);
    }

    assert_eq!(cursor.pos(), 2);
    assert!(cursor.eof());
}

#[test]
fn out_of_bounds_scope_leaves_cursor_untouched() {
    let bytes = counting_bytes(4);
    let mut cursor = ByteCursor::new(&bytes);
    cursor.skip(1).unwrap();

    assert!(cursor.explore(ByteOrder::BigEndian, 4).unwrap_err().is_bounds());
    assert!(cursor.explore_at(10).unwrap_err().is_bounds());

    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.byte_order(), ByteOrder::LittleEndian);
}

#[test]
fn same_state_scope_is_a_no_op() {
    let bytes = counting_bytes(4);
    let mut cursor = ByteCursor::new(&bytes);
    cursor.skip(2).unwrap();

    let explorer = cursor.explore(ByteOrder::LittleEndian, 2).unwrap();
    assert_eq!(explorer.pos(), 2);
    drop(explorer);

    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.byte_order(), ByteOrder::LittleEndian);
}

#[test]
fn scope_is_restored_on_early_return() {
    fn find_marker(cursor: &mut ByteCursor<'_>, marker: u8) -> Result<usize, bytecursor::CursorError> {
        let mut explorer = cursor.explore_at(0)?;
        loop {
            if explorer.read_u8()? == marker {
                return Ok(explorer.pos() - 1);
            }
        }
    }

    let bytes = counting_bytes(6);
    let mut cursor = ByteCursor::new(&bytes);
    cursor.skip(3).unwrap();

    assert_eq!(find_marker(&mut cursor, 2).unwrap(), 1);
    assert_eq!(cursor.pos(), 3);

    assert!(find_marker(&mut cursor, 0xFF).unwrap_err().is_bounds());
    assert_eq!(cursor.pos(), 3);
}
