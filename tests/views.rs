extern crate csv;

use refcard::{
    build, catalog, generate, AddressingMode, BuiltinProvider, ErrorKind, OpcodeProvider, View,
    Views,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::thread;

#[derive(Debug, Deserialize, PartialEq)]
struct Branch {
    #[serde(rename = "Opcode")]
    mnemonic: String,
    #[serde(rename = "Hex")]
    hex: String,
    #[serde(rename = "N")]
    not_taken: u8,
    #[serde(rename = "T")]
    taken: u8,
    #[serde(rename = "P")]
    page_crossed: u8,
}

fn views(undocumented: bool) -> Views {
    generate("6502", &BuiltinProvider, undocumented).unwrap()
}

fn records(lines: &[String]) -> Vec<csv::StringRecord> {
    let text = lines.join("\n");
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
        .records()
        .map(|r| r.unwrap())
        .collect()
}

fn fields(record: &csv::StringRecord, from: usize, to: usize) -> Vec<&str> {
    record.iter().skip(from).take(to - from).collect()
}

// Mnemonics named in the first column, header skipped.
fn first_column(records: &[csv::StringRecord]) -> HashSet<String> {
    records[1..]
        .iter()
        .map(|r| r[0].to_owned())
        .filter(|m| !m.is_empty())
        .collect()
}

fn list_mnemonics(views: &Views) -> HashSet<String> {
    records(&views.list)
        .iter()
        .map(|r| r[0].split(' ').next().unwrap().to_owned())
        .collect()
}

#[test]
fn full_matrix_columns_line_up() {
    for &undocumented in &[false, true] {
        let views = views(undocumented);
        let rows = records(&views.full);
        // 1 + 8 status columns + 12 modes of 3 columns each, plus the
        // empty field after the trailing comma.
        for row in rows.iter() {
            assert_eq!(46, row.len(), "{:?}", row);
        }
        for row in records(&views.compact).iter() {
            assert_eq!(46, row.len(), "{:?}", row);
        }
        assert!(views.full[0].ends_with(",\"relative\",,,"));
        assert_eq!(views.full[0], views.compact[0]);
    }
}

#[test]
fn compact_rows_are_full_data_rows() {
    let views = views(false);
    let full = records(&views.full);
    let compact = records(&views.compact);
    assert_eq!(full.len() - 1, (compact.len() - 1) * 2);

    for (i, row) in compact.iter().enumerate().skip(1) {
        let label = &full[i * 2 - 1];
        let data = &full[i * 2];
        assert_eq!(&label[0], &row[0]);
        assert_eq!(fields(label, 1, 9), fields(row, 1, 9));
        assert_eq!(fields(data, 9, data.len()), fields(row, 9, row.len()));
    }
}

#[test]
fn implicit_and_matrix_partition_the_mnemonics() {
    for &undocumented in &[false, true] {
        let views = views(undocumented);
        let matrix = first_column(&records(&views.full));
        let implicit = first_column(&records(&views.implicit));
        let all = list_mnemonics(&views);

        assert!(matrix.is_disjoint(&implicit));
        let union: HashSet<String> = matrix.union(&implicit).cloned().collect();
        assert_eq!(all, union);
        assert!(implicit.contains("CLC"));
        assert!(implicit.contains("BRK"));
        assert!(matrix.contains("ASL"));
        assert!(matrix.contains("BPL"));
    }
}

#[test]
fn flat_list_has_no_header() {
    for &undocumented in &[false, true] {
        let views = views(undocumented);
        assert!(views.list[0].starts_with("\"ADC #nn\","), "{}", views.list[0]);
        assert!(views.list.iter().all(|l| l.starts_with('"')));
    }
    assert_eq!(151, views(false).list.len());
}

#[test]
fn extra_cycle_marker() {
    let cpu = catalog("6502").unwrap();
    let views = views(true);
    for row in records(&views.list).iter() {
        let opcode = u8::from_str_radix(&row[9], 16).unwrap();
        let extra = cpu.extra_cycles[opcode as usize] > 0;
        assert_eq!(extra, row[10].ends_with('+'), "{:?}", row);
        assert_eq!(
            cpu.cycles[opcode as usize].to_string(),
            row[10].trim_end_matches('+')
        );
    }
}

#[test]
fn brk_is_implicit_only() {
    let views = views(false);
    let brk: Vec<csv::StringRecord> = records(&views.implicit)
        .into_iter()
        .filter(|r| &r[0] == "BRK")
        .collect();
    assert_eq!(1, brk.len());
    assert_eq!("00", &brk[0][9]);
    assert_eq!("7", &brk[0][10]);
    assert_eq!("1", &brk[0][11]);
    assert_eq!(views.implicit[0], "Opcode,N,V,-,B,D,I,Z,C,Hex,C,B");
}

#[test]
fn branches() {
    let views = views(false);
    let text = views.relative.join("\n");
    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let branches: Vec<Branch> = rdr.deserialize().map(|r| r.unwrap()).collect();

    let names: Vec<&str> = branches.iter().map(|b| b.mnemonic.as_str()).collect();
    assert_eq!(
        vec!["BCC", "BCS", "BEQ", "BMI", "BNE", "BPL", "BVC", "BVS"],
        names
    );
    let bpl: Vec<&Branch> = branches.iter().filter(|b| b.mnemonic == "BPL").collect();
    assert_eq!(
        vec![&Branch {
            mnemonic: "BPL".to_owned(),
            hex: "10".to_owned(),
            not_taken: 2,
            taken: 3,
            page_crossed: 4,
        }],
        bpl
    );

    let list_bpl: Vec<&String> = views
        .list
        .iter()
        .filter(|l| l.starts_with("\"BPL "))
        .collect();
    assert_eq!(1, list_bpl.len());
    assert!(list_bpl[0].ends_with(",10,2+,2,"));
}

#[test]
fn quoted_labels() {
    let views = views(false);
    assert!(views.full.iter().any(|l| l.contains(",\"ORA $nn,X\",")));
    assert!(views.list.contains(&"\"ORA $nn,X\",N, , , , , ,Z, ,15,4,2,".to_owned()));
    assert!(views.list.contains(&"\"LDA $nnnn,X\",N, , , , , ,Z, ,bd,4+,3,".to_owned()));
    assert!(views.list.contains(&"\"JMP ($nnnn)\", , , , , , , , ,6c,5,3,".to_owned()));
    for line in views.implicit.iter().chain(views.relative.iter()) {
        assert!(!line.contains('"'));
    }
}

#[test]
fn undocumented_opcodes_are_opt_in() {
    let documented = views(false);
    let all = views(true);

    let doc = list_mnemonics(&documented);
    assert_eq!(56, doc.len());
    assert!(!doc.contains("SLO"));
    assert!(!doc.contains("KIL"));

    let und = list_mnemonics(&all);
    assert!(und.contains("SLO"));
    assert!(und.contains("LAX"));
    // Jam slots have no cycle cost and never become instructions.
    assert!(!und.contains("KIL"));
    // The documented NOP and SBC keep their slots.
    assert!(all.list.contains(&"\"NOP \", , , , , , , , ,ea,2,1,".to_owned()));
    assert!(all.list.contains(&"\"SBC #nn\",N,V, , , , ,Z,C,e9,2,2,".to_owned()));
}

#[test]
fn populated_pairs_match_raw_slots() {
    let cpu = catalog("6502").unwrap();
    let table = BuiltinProvider.opcode_table("6502").unwrap();
    for &undocumented in &[false, true] {
        let index = build("6502", &table, cpu.cycles, cpu.extra_cycles, undocumented).unwrap();
        let pairs: HashSet<(String, AddressingMode)> = table
            .iter()
            .filter(|(op, e)| {
                !e.is_sentinel()
                    && cpu.cycles[*op as usize] > 0
                    && (undocumented || !e.is_undocumented())
            })
            .map(|(_, e)| (e.mnemonic.to_uppercase(), cpu.display_mode(e.mode)))
            .collect();
        assert_eq!(pairs.len(), index.mode_count());
        assert_eq!(index.mode_count(), views(undocumented).list.len());

        // With undocumented opcodes several slots share a (mnemonic, mode)
        // pair, e.g. the implicit NOPs and SBC #nn at e9 and eb; only one
        // of each survives.
        let slots = table
            .iter()
            .filter(|(op, e)| {
                !e.is_sentinel()
                    && cpu.cycles[*op as usize] > 0
                    && (undocumented || !e.is_undocumented())
            })
            .count();
        if undocumented {
            assert!(slots > index.mode_count());
        } else {
            assert_eq!(slots, index.mode_count());
        }
    }

    let index = build("6502", &table, cpu.cycles, cpu.extra_cycles, false).unwrap();
    assert_eq!(151, index.mode_count());
}

#[test]
fn rendering_is_repeatable() {
    let cpu = catalog("6502").unwrap();
    let table = BuiltinProvider.opcode_table("6502").unwrap();
    let a = build("6502", &table, cpu.cycles, cpu.extra_cycles, true).unwrap();
    let b = build("6502", &table, cpu.cycles, cpu.extra_cycles, true).unwrap();
    assert_eq!(a, b);
    assert_eq!(Views::render(&a, cpu), Views::render(&b, cpu));
    assert_eq!(views(true).to_string(), views(true).to_string());
}

#[test]
fn views_render_concurrently() {
    let cpu = catalog("6502").unwrap();
    let table = BuiltinProvider.opcode_table("6502").unwrap();
    let index = build("6502", &table, cpu.cycles, cpu.extra_cycles, false).unwrap();
    let expected = Views::render(&index, cpu);

    thread::scope(|s| {
        let handles: Vec<_> = View::ALL
            .iter()
            .map(|&view| {
                let index = &index;
                s.spawn(move || (view, refcard::render(view, index, cpu)))
            })
            .collect();
        for h in handles {
            let (view, lines) = h.join().unwrap();
            assert_eq!(expected.get(view), &lines[..]);
        }
    });
}

#[test]
fn unknown_cpu_produces_nothing() {
    let err = generate("6809", &BuiltinProvider, false).unwrap_err();
    match err.kind() {
        ErrorKind::UnknownCpu(cpu, _) => assert_eq!("6809", cpu.as_str()),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(
        "no catalog registered for cpu '6809' (known: 6502)",
        err.to_string()
    );
}
