//! The generated symbol table.
//!
//! Transcribed from the package's notebook exports. The documentation
//! tooling regenerates this table wholesale; it is never edited entry by
//! entry.

use crate::base::SourceUnit;

/// Exported symbol -> defining notebook, in export order.
pub(super) const SYMBOL_TABLE: &[(&str, SourceUnit)] = &[
    ("H_OBC_Kitaev_LR_QP", SourceUnit::Hamiltonians),
    ("H_OBC_Majoranas_Kitaev_LR_QP", SourceUnit::Hamiltonians),
    ("H_APBC_Kitaev_LR_QP", SourceUnit::Hamiltonians),
    ("H_Kitaev_LR_QP", SourceUnit::Hamiltonians),
    ("h_chiral_Kitaev_LR_QP", SourceUnit::Hamiltonians),
    ("H_Kitaev_LR_QP_inf", SourceUnit::Hamiltonians),
    ("h_chiral_Kitaev_LR_QP_inf", SourceUnit::Hamiltonians),
    ("H_pbc_sp", SourceUnit::Hamiltonians),
    ("d_h_chiral_Kitaev_LR_QP_inf", SourceUnit::Hamiltonians),
    ("d_H_pbc_sp", SourceUnit::Hamiltonians),
    ("HLP_d", SourceUnit::Hamiltonians),
    ("d_k_H_Kitaev_LR_QP_inf", SourceUnit::Hamiltonians),
    ("d_phase_H_Kitaev_LR_QP_inf", SourceUnit::Hamiltonians),
    ("Fibonacci", SourceUnit::Hamiltonians),
    ("df", SourceUnit::Hamiltonians),
    ("HLP", SourceUnit::Hamiltonians),
    ("rot_sigma_y", SourceUnit::Hamiltonians),
    ("Fukui_Kitaev_LR_QP_wn", SourceUnit::WindingNum),
    ("Fukui_Kitaev_LR_QP_inf_wn", SourceUnit::WindingNum),
    ("Real_space_Kitaev_LR_QP_wn", SourceUnit::WindingNum),
    ("w", SourceUnit::WindingNum),
    ("Chiral_Kitaev_QP_LR_wn", SourceUnit::WindingNum),
    ("d_num_h_Kitaev_LR_QP_inf", SourceUnit::WindingNum),
    ("Fukui_Kitaev_AA_2D_chern", SourceUnit::WindingNum),
    ("Fukui_Kitaev_AA_2D_chern_inf", SourceUnit::WindingNum),
    ("d_num_k_H_Kitaev_LR_QP", SourceUnit::WindingNum),
    ("d_num_phase_H_Kitaev_LR_QP", SourceUnit::WindingNum),
    ("compute_Kitaev_AA_wn_TKNN", SourceUnit::WindingNum),
    ("d_num_k_H_Kitaev_LR_QP_inf", SourceUnit::WindingNum),
    ("d_num_phase_H_Kitaev_LR_QP_inf", SourceUnit::WindingNum),
    ("compute_Kitaev_AA_wn_TKNN_inf", SourceUnit::WindingNum),
];
