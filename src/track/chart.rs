//! Built-in chart, packed one byte per slot (see [`super::TrackSlot`]).

pub(crate) const BUILTIN_CHART: [u8; 129] = [
    0x00, //
    0x00, 0x00, 0x08, 0x08, 0x08, 0x80, 0x04, 0x02, //
    0x04, 0x40, 0x08, 0x80, 0x00, 0x00, 0x04, 0x02, //
    0x04, 0x40, 0x08, 0x04, 0x40, 0x02, 0x20, 0x01, //
    0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x02, 0x20, //
    0x04, 0x40, 0x08, 0x80, 0x04, 0x40, 0x02, 0x20, //
    0x04, 0x40, 0x08, 0x04, 0x40, 0x40, 0x02, 0x20, //
    0x04, 0x40, 0x08, 0x04, 0x40, 0x02, 0x20, 0x01, //
    0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x08, 0x08, 0x08, 0x80, 0x04, 0x02, //
    0x04, 0x40, 0x02, 0x08, 0x80, 0x00, 0x02, 0x01, //
    0x04, 0x40, 0x08, 0x80, 0x04, 0x02, 0x20, 0x01, //
    0x10, 0x10, 0x12, 0x20, 0x00, 0x00, 0x02, 0x20, //
    0x04, 0x40, 0x08, 0x04, 0x40, 0x40, 0x02, 0x20, //
    0x04, 0x40, 0x08, 0x04, 0x40, 0x40, 0x02, 0x20, //
    0x04, 0x40, 0x08, 0x04, 0x40, 0x40, 0x02, 0x20, //
    0x01, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00, //
];
