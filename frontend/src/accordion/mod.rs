pub mod yw_material_accordion;
