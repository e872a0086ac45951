// A protein from a FastA file: the header text (without the '>') and the residues, with anything
// that isn't an ASCII letter already removed.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    pub id: String,
    pub sequence: String,
}

// For our purposes, a sequence file is just a Vec of records, in file order.
//

pub type SeqFile = Vec<ProteinRecord>;
