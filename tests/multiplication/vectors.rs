/// `(left, right, product)` in hexadecimal literal form.
pub const PRODUCTS: [(&str, &str, &str); 153] = [
    ("0xFEDCBA9876543210", "0xFEDCBA9876543210", "0xFDBAC097C8DC5ACCDEEC6CD7A44A4100"),
    ("0xFEDCBA9876543210", "0xFEDCBA987654320F", "0xFDBAC097C8DC5ACBE00FB23F2DF60EF0"),
    ("0xFEDCBA9876543210", "0xFEDCBA98", "0xFDBAC097530ECA86541D5980"),
    ("0xFEDCBA9876543210", "0xFEDCBA97", "0xFDBAC09654320FEDDDC92770"),
    ("0xFEDCBA9876543210", "0x1234", "0x121F49F49F49F49F4B40"),
    ("0xFEDCBA9876543210", "0x3", "0x2FC962FC962FC9630"),
    ("0xFEDCBA9876543210", "0x2", "0x1FDB97530ECA86420"),
    ("0xFEDCBA9876543210", "0x1", "0xFEDCBA9876543210"),
    ("0xFEDCBA9876543210", "0x0", "0x0"),
    ("0xFEDCBA9876543210", "-0x1", "-0xFEDCBA9876543210"),
    ("0xFEDCBA9876543210", "-0x2", "-0x1FDB97530ECA86420"),
    ("0xFEDCBA9876543210", "-0x3", "-0x2FC962FC962FC9630"),
    ("0xFEDCBA9876543210", "-0x1234", "-0x121F49F49F49F49F4B40"),
    ("0xFEDCBA9876543210", "-0xFEDCBA97", "-0xFDBAC09654320FEDDDC92770"),
    ("0xFEDCBA9876543210", "-0xFEDCBA98", "-0xFDBAC097530ECA86541D5980"),
    ("0xFEDCBA9876543210", "-0xFEDCBA987654320F", "-0xFDBAC097C8DC5ACBE00FB23F2DF60EF0"),
    ("0xFEDCBA9876543210", "-0xFEDCBA9876543210", "-0xFDBAC097C8DC5ACCDEEC6CD7A44A4100"),
    ("0xFEDCBA987654320F", "0xFEDCBA987654320F", "0xFDBAC097C8DC5ACAE132F7A6B7A1DCE1"),
    ("0xFEDCBA987654320F", "0xFEDCBA98", "0xFDBAC097530ECA8555409EE8"),
    ("0xFEDCBA987654320F", "0xFEDCBA97", "0xFDBAC09654320FECDEEC6CD9"),
    ("0xFEDCBA987654320F", "0x1234", "0x121F49F49F49F49F390C"),
    ("0xFEDCBA987654320F", "0x3", "0x2FC962FC962FC962D"),
    ("0xFEDCBA987654320F", "0x2", "0x1FDB97530ECA8641E"),
    ("0xFEDCBA987654320F", "0x1", "0xFEDCBA987654320F"),
    ("0xFEDCBA987654320F", "0x0", "0x0"),
    ("0xFEDCBA987654320F", "-0x1", "-0xFEDCBA987654320F"),
    ("0xFEDCBA987654320F", "-0x2", "-0x1FDB97530ECA8641E"),
    ("0xFEDCBA987654320F", "-0x3", "-0x2FC962FC962FC962D"),
    ("0xFEDCBA987654320F", "-0x1234", "-0x121F49F49F49F49F390C"),
    ("0xFEDCBA987654320F", "-0xFEDCBA97", "-0xFDBAC09654320FECDEEC6CD9"),
    ("0xFEDCBA987654320F", "-0xFEDCBA98", "-0xFDBAC097530ECA8555409EE8"),
    ("0xFEDCBA987654320F", "-0xFEDCBA987654320F", "-0xFDBAC097C8DC5ACAE132F7A6B7A1DCE1"),
    ("0xFEDCBA987654320F", "-0xFEDCBA9876543210", "-0xFDBAC097C8DC5ACBE00FB23F2DF60EF0"),
    ("0xFEDCBA98", "0xFEDCBA98", "0xFDBAC096DD413A40"),
    ("0xFEDCBA98", "0xFEDCBA97", "0xFDBAC095DE647FA8"),
    ("0xFEDCBA98", "0x1234", "0x121F49F496E0"),
    ("0xFEDCBA98", "0x3", "0x2FC962FC8"),
    ("0xFEDCBA98", "0x2", "0x1FDB97530"),
    ("0xFEDCBA98", "0x1", "0xFEDCBA98"),
    ("0xFEDCBA98", "0x0", "0x0"),
    ("0xFEDCBA98", "-0x1", "-0xFEDCBA98"),
    ("0xFEDCBA98", "-0x2", "-0x1FDB97530"),
    ("0xFEDCBA98", "-0x3", "-0x2FC962FC8"),
    ("0xFEDCBA98", "-0x1234", "-0x121F49F496E0"),
    ("0xFEDCBA98", "-0xFEDCBA97", "-0xFDBAC095DE647FA8"),
    ("0xFEDCBA98", "-0xFEDCBA98", "-0xFDBAC096DD413A40"),
    ("0xFEDCBA98", "-0xFEDCBA987654320F", "-0xFDBAC097530ECA8555409EE8"),
    ("0xFEDCBA98", "-0xFEDCBA9876543210", "-0xFDBAC097530ECA86541D5980"),
    ("0xFEDCBA97", "0xFEDCBA97", "0xFDBAC094DF87C511"),
    ("0xFEDCBA97", "0x1234", "0x121F49F484AC"),
    ("0xFEDCBA97", "0x3", "0x2FC962FC5"),
    ("0xFEDCBA97", "0x2", "0x1FDB9752E"),
    ("0xFEDCBA97", "0x1", "0xFEDCBA97"),
    ("0xFEDCBA97", "0x0", "0x0"),
    ("0xFEDCBA97", "-0x1", "-0xFEDCBA97"),
    ("0xFEDCBA97", "-0x2", "-0x1FDB9752E"),
    ("0xFEDCBA97", "-0x3", "-0x2FC962FC5"),
    ("0xFEDCBA97", "-0x1234", "-0x121F49F484AC"),
    ("0xFEDCBA97", "-0xFEDCBA97", "-0xFDBAC094DF87C511"),
    ("0xFEDCBA97", "-0xFEDCBA98", "-0xFDBAC095DE647FA8"),
    ("0xFEDCBA97", "-0xFEDCBA987654320F", "-0xFDBAC09654320FECDEEC6CD9"),
    ("0xFEDCBA97", "-0xFEDCBA9876543210", "-0xFDBAC09654320FEDDDC92770"),
    ("0x1234", "0x1234", "0x14B5A90"),
    ("0x1234", "0x3", "0x369C"),
    ("0x1234", "0x2", "0x2468"),
    ("0x1234", "0x1", "0x1234"),
    ("0x1234", "0x0", "0x0"),
    ("0x1234", "-0x1", "-0x1234"),
    ("0x1234", "-0x2", "-0x2468"),
    ("0x1234", "-0x3", "-0x369C"),
    ("0x1234", "-0x1234", "-0x14B5A90"),
    ("0x1234", "-0xFEDCBA97", "-0x121F49F484AC"),
    ("0x1234", "-0xFEDCBA98", "-0x121F49F496E0"),
    ("0x1234", "-0xFEDCBA987654320F", "-0x121F49F49F49F49F390C"),
    ("0x1234", "-0xFEDCBA9876543210", "-0x121F49F49F49F49F4B40"),
    ("0x3", "0x3", "0x9"),
    ("0x3", "0x2", "0x6"),
    ("0x3", "0x1", "0x3"),
    ("0x3", "0x0", "0x0"),
    ("0x3", "-0x1", "-0x3"),
    ("0x3", "-0x2", "-0x6"),
    ("0x3", "-0x3", "-0x9"),
    ("0x3", "-0x1234", "-0x369C"),
    ("0x3", "-0xFEDCBA97", "-0x2FC962FC5"),
    ("0x3", "-0xFEDCBA98", "-0x2FC962FC8"),
    ("0x3", "-0xFEDCBA987654320F", "-0x2FC962FC962FC962D"),
    ("0x3", "-0xFEDCBA9876543210", "-0x2FC962FC962FC9630"),
    ("0x2", "0x2", "0x4"),
    ("0x2", "0x1", "0x2"),
    ("0x2", "0x0", "0x0"),
    ("0x2", "-0x1", "-0x2"),
    ("0x2", "-0x2", "-0x4"),
    ("0x2", "-0x3", "-0x6"),
    ("0x2", "-0x1234", "-0x2468"),
    ("0x2", "-0xFEDCBA97", "-0x1FDB9752E"),
    ("0x2", "-0xFEDCBA98", "-0x1FDB97530"),
    ("0x2", "-0xFEDCBA987654320F", "-0x1FDB97530ECA8641E"),
    ("0x2", "-0xFEDCBA9876543210", "-0x1FDB97530ECA86420"),
    ("0x1", "0x1", "0x1"),
    ("0x1", "0x0", "0x0"),
    ("0x1", "-0x1", "-0x1"),
    ("0x1", "-0x2", "-0x2"),
    ("0x1", "-0x3", "-0x3"),
    ("0x1", "-0x1234", "-0x1234"),
    ("0x1", "-0xFEDCBA97", "-0xFEDCBA97"),
    ("0x1", "-0xFEDCBA98", "-0xFEDCBA98"),
    ("0x1", "-0xFEDCBA987654320F", "-0xFEDCBA987654320F"),
    ("0x1", "-0xFEDCBA9876543210", "-0xFEDCBA9876543210"),
    ("0x0", "0x0", "0x0"),
    ("0x0", "-0x1", "0x0"),
    ("0x0", "-0x2", "0x0"),
    ("0x0", "-0x3", "0x0"),
    ("0x0", "-0x1234", "0x0"),
    ("0x0", "-0xFEDCBA97", "0x0"),
    ("0x0", "-0xFEDCBA98", "0x0"),
    ("0x0", "-0xFEDCBA987654320F", "0x0"),
    ("0x0", "-0xFEDCBA9876543210", "0x0"),
    ("-0x1", "-0x1", "0x1"),
    ("-0x1", "-0x2", "0x2"),
    ("-0x1", "-0x3", "0x3"),
    ("-0x1", "-0x1234", "0x1234"),
    ("-0x1", "-0xFEDCBA97", "0xFEDCBA97"),
    ("-0x1", "-0xFEDCBA98", "0xFEDCBA98"),
    ("-0x1", "-0xFEDCBA987654320F", "0xFEDCBA987654320F"),
    ("-0x1", "-0xFEDCBA9876543210", "0xFEDCBA9876543210"),
    ("-0x2", "-0x2", "0x4"),
    ("-0x2", "-0x3", "0x6"),
    ("-0x2", "-0x1234", "0x2468"),
    ("-0x2", "-0xFEDCBA97", "0x1FDB9752E"),
    ("-0x2", "-0xFEDCBA98", "0x1FDB97530"),
    ("-0x2", "-0xFEDCBA987654320F", "0x1FDB97530ECA8641E"),
    ("-0x2", "-0xFEDCBA9876543210", "0x1FDB97530ECA86420"),
    ("-0x3", "-0x3", "0x9"),
    ("-0x3", "-0x1234", "0x369C"),
    ("-0x3", "-0xFEDCBA97", "0x2FC962FC5"),
    ("-0x3", "-0xFEDCBA98", "0x2FC962FC8"),
    ("-0x3", "-0xFEDCBA987654320F", "0x2FC962FC962FC962D"),
    ("-0x3", "-0xFEDCBA9876543210", "0x2FC962FC962FC9630"),
    ("-0x1234", "-0x1234", "0x14B5A90"),
    ("-0x1234", "-0xFEDCBA97", "0x121F49F484AC"),
    ("-0x1234", "-0xFEDCBA98", "0x121F49F496E0"),
    ("-0x1234", "-0xFEDCBA987654320F", "0x121F49F49F49F49F390C"),
    ("-0x1234", "-0xFEDCBA9876543210", "0x121F49F49F49F49F4B40"),
    ("-0xFEDCBA97", "-0xFEDCBA97", "0xFDBAC094DF87C511"),
    ("-0xFEDCBA97", "-0xFEDCBA98", "0xFDBAC095DE647FA8"),
    ("-0xFEDCBA97", "-0xFEDCBA987654320F", "0xFDBAC09654320FECDEEC6CD9"),
    ("-0xFEDCBA97", "-0xFEDCBA9876543210", "0xFDBAC09654320FEDDDC92770"),
    ("-0xFEDCBA98", "-0xFEDCBA98", "0xFDBAC096DD413A40"),
    ("-0xFEDCBA98", "-0xFEDCBA987654320F", "0xFDBAC097530ECA8555409EE8"),
    ("-0xFEDCBA98", "-0xFEDCBA9876543210", "0xFDBAC097530ECA86541D5980"),
    ("-0xFEDCBA987654320F", "-0xFEDCBA987654320F", "0xFDBAC097C8DC5ACAE132F7A6B7A1DCE1"),
    ("-0xFEDCBA987654320F", "-0xFEDCBA9876543210", "0xFDBAC097C8DC5ACBE00FB23F2DF60EF0"),
    ("-0xFEDCBA9876543210", "-0xFEDCBA9876543210", "0xFDBAC097C8DC5ACCDEEC6CD7A44A4100"),
];
