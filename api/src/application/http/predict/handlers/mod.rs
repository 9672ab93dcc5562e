pub mod predict_food;
